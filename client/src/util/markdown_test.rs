use super::*;

#[test]
fn renders_basic_markdown() {
    let html = render_markdown_html("# Goals\n\n- **ship** login");
    assert!(html.contains("<h1>Goals</h1>"));
    assert!(html.contains("<strong>ship</strong>"));
}

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("hello <script>alert(1)</script> world");
    assert!(!html.contains("<script>"));
    assert!(html.contains("hello"));
}

#[test]
fn renders_task_lists() {
    let html = render_markdown_html("- [x] done\n- [ ] todo");
    assert!(html.contains("checkbox"));
}
