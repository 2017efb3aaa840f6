//! 장보기 목록 텍스트 렌더링.

/// 다운로드 파일 기본 이름.
pub const SHOPPING_LIST_FILENAME: &str = "shopping_list.txt";
/// 다운로드 파일 MIME 타입.
pub const SHOPPING_LIST_MIME: &str = "text/plain";

const HEADER: &str = "Shopping List";

/// 헤더 한 줄 + 재료당 `- <재료>` 한 줄. 중복 제거/단위 정규화는 하지 않는다.
pub fn render_shopping_list<S: AsRef<str>>(ingredients: &[S]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1);
    out.push_str(HEADER);
    out.push('\n');
    for item in ingredients {
        out.push_str("- ");
        out.push_str(item.as_ref());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_ingredient_plus_header() {
        let items = ["2 eggs", "1 cup milk", "3 eggs"];
        let rendered = render_shopping_list(&items);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), items.len() + 1);
        assert_eq!(lines, vec!["Shopping List", "- 2 eggs", "- 1 cup milk", "- 3 eggs"]);
    }

    #[test]
    fn empty_list_renders_only_header() {
        let rendered = render_shopping_list::<String>(&[]);
        assert_eq!(rendered, "Shopping List\n");
    }
}
