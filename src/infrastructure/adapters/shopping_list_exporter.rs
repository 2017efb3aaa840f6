//! 장보기 목록 파일 내보내기 어댑터.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::application::ports::ShoppingListExporter;
use crate::domain::shopping::SHOPPING_LIST_MIME;

/// UTF-8 plain text 파일로 저장한다. 상위 디렉터리가 없으면 만든다.
pub struct FileShoppingListExporter;

impl ShoppingListExporter for FileShoppingListExporter {
    fn export(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(path, content)
            .with_context(|| format!("failed to write shopping list to {}", path.display()))?;
        info!(path = %path.display(), mime = SHOPPING_LIST_MIME, "exported shopping list");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_content_and_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lists").join("shopping_list.txt");

        FileShoppingListExporter
            .export(&path, "Shopping List\n- 2 eggs\n")
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Shopping List\n- 2 eggs\n");
    }
}
