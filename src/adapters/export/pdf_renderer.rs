//! PDF renderer backed by lopdf.
//!
//! Layout coordinates are millimetres from the top-left corner of an A4
//! page. PDF user space is points from the bottom-left, so every line is
//! scaled and flipped before it is written.
//!
//! Text is written in WinAnsiEncoding; characters outside it become `?`.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::domain::export::{ExportLayout, TextLine, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::domain::foundation::ExportError;
use crate::ports::{DocumentRenderer, ExportFormat};

const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// Font resource name used in page content streams.
const FONT_KEY: &str = "F1";

pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Renders layouts as single-font A4 PDFs.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    font_size: f64,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE)
    }
}

impl PdfRenderer {
    pub fn new(font_size: f64) -> Self {
        Self { font_size }
    }

    fn to_points(mm: f64) -> f32 {
        (mm * POINTS_PER_MM) as f32
    }

    fn page_content(&self, lines: &[TextLine]) -> Content {
        let mut operations = Vec::with_capacity(lines.len() * 5);
        for line in lines {
            let x = Self::to_points(line.x);
            let y = Self::to_points(PAGE_HEIGHT_MM - line.y);
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec![FONT_KEY.into(), (self.font_size as f32).into()],
            ));
            operations.push(Operation::new("Td", vec![x.into(), y.into()]));
            operations.push(Operation::new(
                "Tj",
                vec![Object::String(
                    encode_win_ansi(&line.text),
                    StringFormat::Literal,
                )],
            ));
            operations.push(Operation::new("ET", vec![]));
        }
        Content { operations }
    }
}

impl DocumentRenderer for PdfRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn render(&self, layout: &ExportLayout) -> Result<Vec<u8>, ExportError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                FONT_KEY => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(layout.page_count());
        for page in layout.pages() {
            let encoded = self
                .page_content(&page.lines)
                .encode()
                .map_err(|e| ExportError::render_failed(format!("content stream: {}", e)))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => layout.page_count() as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Self::to_points(PAGE_WIDTH_MM).into(),
                Self::to_points(PAGE_HEIGHT_MM).into(),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| ExportError::render_failed(format!("pdf write: {}", e)))?;
        Ok(buffer)
    }
}

/// Byte substituted for characters WinAnsiEncoding cannot represent.
const UNMAPPED: u8 = b'?';

/// Encodes `text` for a WinAnsiEncoding simple font.
///
/// ASCII and Latin-1 (U+00A0..=U+00FF) map to themselves; the 0x80..0x9F
/// block holds the typographic extras below.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u8,
            _ => win_ansi_extra(c).unwrap_or(UNMAPPED),
        })
        .collect()
}

fn win_ansi_extra(c: char) -> Option<u8> {
    let byte = match c {
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => return None,
    };
    Some(byte)
}
