use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType, Table, TableCell,
    TableRow,
};

use crate::error::ReportError;
use crate::styles::DocumentStyles;

/// Generate a DOCX document from rendered template output.
///
/// The `rendered` content uses a simple subset:
/// - `# Heading` → DOCX Heading 1
/// - `## Heading` → DOCX Heading 2
/// - `### Heading` → DOCX Heading 3
/// - `- item` → bullet list item (prefixed with bullet character)
/// - `**bold**` → bold run
/// - `---` or `***` → page break
/// - consecutive `| a | b |` lines → a table, first row as the header
/// - Everything else → normal paragraph
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ReportError> {
    let mut docx = Docx::new();

    // Define heading styles
    docx = docx
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    let mut table_rows: Vec<Vec<String>> = Vec::new();

    for line in rendered.lines() {
        let trimmed = line.trim();

        if let Some(cells) = parse_table_cells(trimmed) {
            table_rows.push(cells);
            continue;
        }
        if is_table_separator(trimmed) {
            // Alignment row between header and body; part of the table.
            continue;
        }
        if !table_rows.is_empty() {
            docx = docx.add_table(build_table(&table_rows, styles));
            table_rows.clear();
        }

        if trimmed.is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
            continue;
        }

        if let Some(text) = trimmed.strip_prefix("### ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading3"));
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading2"));
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading1"));
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            docx = docx.add_paragraph(bullet_paragraph(text, styles));
        } else if trimmed == "---" || trimmed == "***" {
            docx = docx
                .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)));
        } else {
            docx = docx.add_paragraph(body_paragraph(trimmed, styles));
        }
    }
    if !table_rows.is_empty() {
        docx = docx.add_table(build_table(&table_rows, styles));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ReportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

/// A `| a | b |` line split into trimmed cells. `None` when the line is
/// not a table row (or is the `|---|---|` alignment row).
fn parse_table_cells(line: &str) -> Option<Vec<String>> {
    if !line.starts_with('|') || line.len() < 2 || is_table_separator(line) {
        return None;
    }
    let inner = line.trim_matches('|');
    Some(inner.split('|').map(|cell| cell.trim().to_string()).collect())
}

fn is_table_separator(line: &str) -> bool {
    line.starts_with('|')
        && line
            .trim_matches('|')
            .split('|')
            .all(|cell| {
                let cell = cell.trim();
                !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':')
            })
}

fn build_table(rows: &[Vec<String>], styles: &DocumentStyles) -> Table {
    let table_rows: Vec<TableRow> = rows
        .iter()
        .enumerate()
        .map(|(i, cells)| {
            let header = i == 0;
            TableRow::new(
                cells
                    .iter()
                    .map(|cell| {
                        let mut run = Run::new()
                            .add_text(cell.as_str())
                            .fonts(RunFonts::new().ascii(&styles.body_font));
                        if header {
                            run = run.bold();
                        }
                        TableCell::new().add_paragraph(Paragraph::new().add_run(run))
                    })
                    .collect(),
            )
        })
        .collect();
    Table::new(table_rows)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .add_run(Run::new().add_text(text))
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let bullet_run = Run::new()
        .add_text("\u{2022} ")
        .fonts(RunFonts::new().ascii(&styles.body_font));

    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(bullet_run);

    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }

    para
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

/// Parse simple inline formatting: **bold** segments.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let before = &remaining[..start];
        if !before.is_empty() {
            runs.push(
                Run::new()
                    .add_text(before)
                    .fonts(RunFonts::new().ascii(&styles.body_font)),
            );
        }

        let after_start = &remaining[start + 2..];
        if let Some(end) = after_start.find("**") {
            let bold_text = &after_start[..end];
            runs.push(
                Run::new()
                    .add_text(bold_text)
                    .bold()
                    .fonts(RunFonts::new().ascii(&styles.body_font)),
            );
            remaining = &after_start[end + 2..];
        } else {
            // No closing **, treat rest as normal text
            runs.push(
                Run::new()
                    .add_text(remaining)
                    .fonts(RunFonts::new().ascii(&styles.body_font)),
            );
            return runs;
        }
    }

    if !remaining.is_empty() {
        runs.push(
            Run::new()
                .add_text(remaining)
                .fonts(RunFonts::new().ascii(&styles.body_font)),
        );
    }

    runs
}
