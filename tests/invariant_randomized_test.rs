use roadmark::{ClassMap, MarkdownToHtml, RenderOptions, SanitizeMode};

#[derive(Debug, Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const FRAGMENTS: &[&str] = &[
    "*", "**", "_", "__", "`", "```", "```js", "[", "]", "(", ")", "](", "#", "## ", "### ",
    "- ", "* ", "1. ", "> ", "---", "***", "\n", "\n\n", " ", "word", "<script>", "&", "\"",
    "'", "é", "📌", "\r\n", "javascript:", "http://x.y",
];

fn random_document(rng: &mut Lcg, len: usize) -> String {
    (0..len).map(|_| rng.pick(FRAGMENTS)).collect()
}

fn strict() -> MarkdownToHtml {
    MarkdownToHtml::new(RenderOptions {
        classes: ClassMap::bare(),
        ..Default::default()
    })
}

fn tag_balance(html: &str, tag: &str) -> (usize, usize) {
    let open_exact = format!("<{}>", tag);
    let open_attr = format!("<{} ", tag);
    let close = format!("</{}>", tag);
    (
        html.matches(&open_exact).count() + html.matches(&open_attr).count(),
        html.matches(&close).count(),
    )
}

#[test]
fn randomized_rendering_is_total_and_balanced() {
    let mut rng = Lcg::new(0x2026_1019_0001);
    let converter = strict();

    for i in 0..300 {
        let len = (rng.next_u64() % 80) as usize;
        let source = random_document(&mut rng, len);
        let html = converter.render(&source);

        for tag in ["p", "ul", "ol", "li", "blockquote", "pre", "strong", "em", "a", "h1", "h2", "h3"] {
            let (open, close) = tag_balance(&html, tag);
            assert_eq!(
                open, close,
                "unbalanced <{tag}> on iteration {i} for {source:?}: {html}"
            );
        }
        assert!(
            !html.contains("<script>"),
            "raw script tag on iteration {i} for {source:?}"
        );
        assert!(
            !html.contains("href=\"javascript:"),
            "unsafe href on iteration {i} for {source:?}"
        );
    }
}

#[test]
fn randomized_legacy_rendering_is_total() {
    let mut rng = Lcg::new(0x00C0_FFEE);
    let converter = MarkdownToHtml::new(RenderOptions {
        sanitize: SanitizeMode::Legacy,
        merge_blockquotes: true,
        ..Default::default()
    });

    for _ in 0..300 {
        let len = (rng.next_u64() % 80) as usize;
        let source = random_document(&mut rng, len);
        let _ = converter.render(&source);
    }
}

#[test]
fn randomized_fenced_bodies_are_always_escaped() {
    let mut rng = Lcg::new(0xFE_11CE);
    for sanitize in [SanitizeMode::Strict, SanitizeMode::Legacy] {
        let converter = MarkdownToHtml::new(RenderOptions {
            sanitize,
            classes: ClassMap::bare(),
            ..Default::default()
        });
        for _ in 0..100 {
            let body: String = (0..12)
                .map(|_| rng.pick(&["<", ">", "&", "\"", "'", "a", " ", "*", "_"]))
                .collect();
            let html = converter.render(&format!("```\n{}\n```", body.trim()));
            let inner = html
                .strip_prefix("<pre><code>")
                .and_then(|rest| rest.strip_suffix("</code></pre>"))
                .expect("single code block");
            assert!(
                !inner.contains(['<', '>', '"', '\'']),
                "unescaped character in {inner:?}"
            );
        }
    }
}
