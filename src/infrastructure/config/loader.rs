//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::config::Config;

pub(crate) const CONFIG_ENV: &str = "CHEFPILOT_CONFIG";
const DOTENV_FILE: &str = ".env";

/// 현재 디렉터리의 `.env`를 읽어 API 키 등 환경변수를 채운다.
/// 이미 설정된 환경변수는 덮어쓰지 않는다.
pub fn load_dotenv() -> Result<bool> {
    load_env_file(Path::new(DOTENV_FILE))
}

/// 파일이 없으면 `false`, 읽었으면 `true`를 반환한다.
pub(crate) fn load_env_file(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    dotenvy::from_path(path)
        .with_context(|| format!("failed to load env file {}", path.display()))?;
    debug!(path = %path.display(), "loaded env file");
    Ok(true)
}

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
/// 파일이 하나도 없으면 내장 기본값만 사용한다.
pub(crate) fn load_merged_config() -> Result<LoadedConfig> {
    load_from_paths(config_paths())
}

pub(crate) fn load_from_paths(paths: Vec<PathBuf>) -> Result<LoadedConfig> {
    // 낮은 우선순위에서 높은 우선순위 순서로 병합한다.
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        debug!(path = %path.display(), "loaded config");
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc/chefpilot/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("chefpilot").join("config.json"));
    }

    paths.push(PathBuf::from(".chefpilot/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV)
        && !path.trim().is_empty()
    {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from_paths(vec![dir.path().join("absent.json")]).unwrap();

        assert!(loaded.loaded_paths.is_empty());
        assert_eq!(loaded.searched_paths.len(), 1);
        assert_eq!(loaded.config.timeout_secs(), 120);
    }

    #[test]
    fn files_merge_in_priority_order() {
        let dir = tempfile::tempdir().unwrap();
        let low = dir.path().join("low.json");
        let high = dir.path().join("high.json");
        fs::write(
            &low,
            r#"{"defaults": {"max_output_tokens": 500, "shopping_list_path": "low.txt"}}"#,
        )
        .unwrap();
        fs::write(&high, r#"{"defaults": {"shopping_list_path": "high.txt"}}"#).unwrap();

        let loaded = load_from_paths(vec![low.clone(), high.clone()]).unwrap();

        assert_eq!(loaded.loaded_paths, vec![low, high]);
        assert_eq!(loaded.config.generation_settings().max_output_tokens, 500);
        assert_eq!(loaded.config.shopping_list_path(), PathBuf::from("high.txt"));
    }

    #[test]
    fn invalid_json_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();

        let err = load_from_paths(vec![broken]).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }

    #[test]
    fn env_file_sets_variables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "CHEFPILOT_LOADER_TEST_KEY=from-file\n").unwrap();

        assert!(load_env_file(&path).unwrap());
        assert_eq!(env::var("CHEFPILOT_LOADER_TEST_KEY").unwrap(), "from-file");
    }

    #[test]
    fn missing_env_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!load_env_file(&dir.path().join(".env")).unwrap());
    }

    #[test]
    fn duplicate_paths_are_collapsed() {
        let paths = dedup_paths(vec![
            PathBuf::from("a.json"),
            PathBuf::from("b.json"),
            PathBuf::from("a.json"),
        ]);
        assert_eq!(paths, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
    }
}
