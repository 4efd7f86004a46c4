use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, Point};
use crate::errors::QuizError;
use super::layout::{DrawOp, FontStyle, Page, PAGE_HEIGHT, PAGE_WIDTH};

const LAYER_NAME: &str = "Layer 1";

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self, QuizError> {
        let font = |f: BuiltinFont| {
            doc.add_builtin_font(f)
                .map_err(|e| QuizError::Pdf(format!("Failed to add font: {:?}", e)))
        };
        Ok(Self {
            regular: font(BuiltinFont::Helvetica)?,
            bold: font(BuiltinFont::HelveticaBold)?,
            oblique: font(BuiltinFont::HelveticaOblique)?,
        })
    }

    fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Oblique => &self.oblique,
        }
    }
}

/// Encode laid-out pages as a PDF document titled `title`.
pub fn render(title: &str, pages: &[Page]) -> Result<Vec<u8>, QuizError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, mm(PAGE_WIDTH), mm(PAGE_HEIGHT), LAYER_NAME);
    let fonts = Fonts::load(&doc)?;

    let mut first = Some((first_page, first_layer));
    for page in pages {
        let (page_index, layer_index) = match first.take() {
            Some(indices) => indices,
            None => doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), LAYER_NAME),
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for op in &page.ops {
            match op {
                DrawOp::Text { x, y, size, style, text } => {
                    layer.use_text(text.as_str(), *size, mm(*x), mm(*y), fonts.get(*style));
                }
                DrawOp::Rule { from_x, to_x, y, thickness } => {
                    layer.set_outline_thickness(*thickness);
                    layer.add_line(Line {
                        points: vec![
                            (Point::new(mm(*from_x), mm(*y)), false),
                            (Point::new(mm(*to_x), mm(*y)), false),
                        ],
                        is_closed: false,
                    });
                }
            }
        }
    }

    doc.save_to_bytes()
        .map_err(|e| QuizError::Pdf(format!("Failed to encode PDF: {:?}", e)))
}
