//! End-to-end tests for the reconstruction pipeline.

use unscan::{
    assemble, plan, process_str, process_tokens, render, JsonFormat, LayoutConfig, RenderOptions,
    Role, Token,
};

const HEADER: &str =
    "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";

fn word_row(block: i32, left: i32, top: i32, height: u32, conf: i32, text: &str) -> String {
    format!(
        "5\t1\t{}\t1\t1\t1\t{}\t{}\t50\t{}\t{}\t{}",
        block, left, top, height, conf, text
    )
}

fn sample_tsv() -> String {
    let rows = vec![
        word_row(1, 0, 0, 18, 90, "INTRODUCTION"),
        word_row(1, 0, 40, 15, 95, "This"),
        word_row(1, 30, 40, 15, 95, "is"),
        word_row(1, 50, 40, 15, 95, "body."),
    ];
    format!("{}\n{}\n", HEADER, rows.join("\n"))
}

#[test]
fn test_heading_and_body_line_assembly() {
    let tokens = vec![
        Token::new("INTRODUCTION", 0, 0, 18, 90, 1),
        Token::new("This", 0, 40, 15, 95, 1),
        Token::new("is", 30, 40, 15, 95, 1),
        Token::new("body.", 50, 40, 15, 95, 1),
    ];
    let lines = assemble(&tokens, &LayoutConfig::default());

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "INTRODUCTION");
    assert_eq!(lines[0].top, 0);
    assert_eq!(lines[1].text, "This is body.");
    assert_eq!(lines[1].top, 40);
}

#[test]
fn test_size_estimates_and_roles() {
    let tokens = vec![
        Token::new("INTRODUCTION", 0, 0, 18, 90, 1),
        Token::new("This", 0, 40, 15, 95, 1),
        Token::new("is", 30, 40, 15, 95, 1),
        Token::new("body.", 50, 40, 15, 95, 1),
    ];
    let config = LayoutConfig::default();
    let paragraphs = plan(&assemble(&tokens, &config), &config);

    assert_eq!(paragraphs.len(), 2);
    assert_eq!(paragraphs[0].font_size, 14); // round(18 * 0.8)
    assert_eq!(paragraphs[1].font_size, 12); // round(15 * 0.8)

    // Size 14 fails the strict caption bound; both lines are short enough
    // for the standalone promotion, so each lands on level 2.
    assert_eq!(paragraphs[0].role, Role::Heading2);
    assert_eq!(paragraphs[1].role, Role::Heading2);
}

#[test]
fn test_all_noise_stream_yields_empty_document() {
    let rows = vec![
        word_row(1, 0, 0, 15, 12, "garbled"),
        word_row(1, 40, 0, 15, 30, "noise"),
    ];
    let tsv = format!("{}\n{}\n", HEADER, rows.join("\n"));

    let doc = process_str(&tsv).unwrap();
    assert_eq!(doc.paragraph_count(), 0);

    // An empty paragraph sequence still renders a valid (empty) document.
    let options = RenderOptions::default();
    let docx = render::to_docx(&doc, &options).unwrap();
    assert_eq!(&docx[0..2], b"PK");
    assert!(render::to_text(&doc, &options).unwrap().is_empty());
}

#[test]
fn test_line_split_boundaries() {
    let config = LayoutConfig::default();

    // Tops 5 and 14 (difference 9): one line.
    let merged = assemble(
        &[
            Token::new("a", 0, 5, 15, 95, 1),
            Token::new("b", 30, 14, 15, 95, 1),
        ],
        &config,
    );
    assert_eq!(merged.len(), 1);

    // Tops 5 and 16 (difference 11): two lines.
    let split = assemble(
        &[
            Token::new("a", 0, 5, 15, 95, 1),
            Token::new("b", 30, 16, 15, 95, 1),
        ],
        &config,
    );
    assert_eq!(split.len(), 2);
}

#[test]
fn test_pipeline_idempotent() {
    let tsv = sample_tsv();
    let first = process_str(&tsv).unwrap();
    let second = process_str(&tsv).unwrap();

    assert_eq!(first.pages, second.pages);

    let options = RenderOptions::default();
    assert_eq!(
        render::to_markdown(&first, &options).unwrap(),
        render::to_markdown(&second, &options).unwrap()
    );
}

#[test]
fn test_document_structure_end_to_end() {
    // A realistic page: big title, body block, running footer.
    let tokens = vec![
        Token::new("Quarterly", 0, 10, 28, 96, 1),
        Token::new("Report", 130, 11, 28, 96, 1),
        Token::new("Revenue", 0, 80, 14, 93, 2),
        Token::new("grew", 80, 80, 14, 94, 2),
        Token::new("in", 130, 81, 14, 92, 2),
        Token::new("the", 150, 80, 14, 95, 2),
        Token::new("third", 180, 80, 14, 95, 2),
        Token::new("quarter", 230, 80, 14, 95, 2),
        Token::new("again", 300, 81, 14, 95, 2),
        Token::new("across", 0, 104, 14, 95, 2),
        Token::new("all", 60, 104, 14, 95, 2),
        Token::new("seven", 90, 105, 14, 95, 2),
        Token::new("reporting", 140, 104, 14, 95, 2),
        Token::new("segments", 220, 104, 14, 95, 2),
        Token::new("worldwide", 300, 104, 14, 95, 2),
        Token::new("combined", 380, 104, 14, 95, 2),
        Token::new("CONFIDENTIAL", 100, 400, 12, 88, 3),
    ];

    let doc = process_tokens(&tokens, &LayoutConfig::default());
    let paragraphs: Vec<_> = doc.pages[0].paragraphs.iter().collect();
    assert_eq!(paragraphs.len(), 4);

    // Title: size round(28 * 0.8) = 22.
    assert_eq!(paragraphs[0].role, Role::Heading1);
    assert_eq!(paragraphs[0].text, "Quarterly Report");

    // Seven-word body lines, second one continues the first.
    assert_eq!(paragraphs[1].role, Role::Body);
    assert!(!paragraphs[1].is_continuation);
    assert_eq!(paragraphs[2].role, Role::Body);
    assert!(paragraphs[2].is_continuation);

    // All-caps footer, size round(12 * 0.8) = 10 < 14.
    assert_eq!(paragraphs[3].role, Role::Header);

    let md = render::to_markdown(&doc, &RenderOptions::default()).unwrap();
    assert!(md.contains("# Quarterly Report"));
    assert!(md.contains(
        "Revenue grew in the third quarter again across all seven reporting segments worldwide combined"
    ));
    assert!(md.contains("*CONFIDENTIAL*"));
}

#[test]
fn test_json_render_round_trips() {
    let doc = process_str(&sample_tsv()).unwrap();
    let json = render::to_json(&doc, JsonFormat::Compact).unwrap();
    let back: unscan::Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back.pages, doc.pages);
}

#[test]
fn test_empty_tsv_renders_everywhere() {
    let doc = process_str(HEADER).unwrap();
    let options = RenderOptions::default();
    assert!(render::to_markdown(&doc, &options).unwrap().is_empty());
    assert!(render::to_text(&doc, &options).unwrap().is_empty());
    assert!(render::to_json(&doc, JsonFormat::Pretty).is_ok());
    assert!(render::to_docx(&doc, &options).is_ok());
}
