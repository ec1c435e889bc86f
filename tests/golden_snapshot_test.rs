use pretty_assertions::assert_eq;
use roadmark::{ClassMap, MarkdownToHtml, RenderOptions, SanitizeMode};

fn bare(sanitize: SanitizeMode) -> MarkdownToHtml {
    MarkdownToHtml::new(RenderOptions {
        sanitize,
        classes: ClassMap::bare(),
        ..Default::default()
    })
}

#[test]
fn golden_snapshot_study_plan_output() {
    let source = include_str!("golden/study_plan.md");
    let html = bare(SanitizeMode::Strict).render(source);

    let expected = include_str!("golden/study_plan_expected.html");
    assert_eq!(html.trim_end(), expected.trim_end());
}

#[test]
fn golden_snapshot_cheat_sheet_legacy_output() {
    let source = include_str!("golden/cheat_sheet.md");
    let html = bare(SanitizeMode::Legacy).render(source);

    let expected = include_str!("golden/cheat_sheet_legacy_expected.html");
    assert_eq!(html.trim_end(), expected.trim_end());
}

#[test]
fn golden_snapshot_cheat_sheet_strict_escapes_inline_markup() {
    let source = include_str!("golden/cheat_sheet.md");
    let html = bare(SanitizeMode::Strict).render(source);

    assert!(html.contains("<li>Use &lt;kbd&gt;LRU&lt;/kbd&gt; eviction</li>"));
    assert!(!html.contains("<kbd>"));
}
