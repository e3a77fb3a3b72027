use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use kurbo::{Circle, PathEl, Shape};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};

use crate::anchors::target::AnchorHandle;
use crate::config::FontFamily;
use crate::draw::metrics::{encode_win_ansi, encoded_width};
use crate::draw::{Align, CELL_PADDING, FontStyle, Surface};
use crate::foundation::core::{Point, Rect, Rgb8, Size};
use crate::foundation::error::{BujoError, BujoResult};

const RECT_LINE_WIDTH: f64 = 0.5;
const CIRCLE_TOLERANCE: f64 = 0.05;
// Baseline offset below a cell's vertical center, as a fraction of the font size.
const BASELINE_SHIFT: f64 = 0.3;

/// Metadata written to the document information dictionary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Document title.
    pub title: String,
    /// Document author.
    pub author: String,
}

struct PageBuffer {
    id: ObjectId,
    ops: Vec<Operation>,
    annots: Vec<ObjectId>,
    fill: Option<Rgb8>,
}

/// [`Surface`] that builds a PDF document in memory.
///
/// Anchors become named destinations in the catalog's `/Dests` dictionary, so a link may name an
/// anchor whose page is emitted later. Finalizing fails if any link names an anchor that no page
/// bound.
pub struct PdfSurface {
    doc: Document,
    pages_id: ObjectId,
    size: Size,
    family: FontFamily,
    info: DocumentInfo,
    kids: Vec<ObjectId>,
    current: Option<PageBuffer>,
    style: FontStyle,
    font_size: f64,
    text_color: Rgb8,
    dests: BTreeMap<AnchorHandle, ObjectId>,
    linked: BTreeSet<AnchorHandle>,
}

impl PdfSurface {
    /// Start an empty document with uniform page `size`.
    pub fn new(size: Size, family: FontFamily, info: DocumentInfo) -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            size,
            family,
            info,
            kids: Vec::new(),
            current: None,
            style: FontStyle::Regular,
            font_size: 12.0,
            text_color: Rgb8::BLACK,
            dests: BTreeMap::new(),
            linked: BTreeSet::new(),
        }
    }

    /// Number of pages started so far.
    pub fn page_count(&self) -> usize {
        self.kids.len() + usize::from(self.current.is_some())
    }

    /// Finalize and serialize the document.
    pub fn to_bytes(mut self) -> BujoResult<Vec<u8>> {
        self.finalize()?;
        let mut buf = Vec::new();
        self.doc
            .save_to(&mut buf)
            .map_err(|e| BujoError::output(format!("serialize pdf: {e}")))?;
        Ok(buf)
    }

    /// Finalize the document and write it to `path`, creating parent directories.
    pub fn save(self, path: &Path) -> BujoResult<()> {
        ensure_parent_dir(path)?;
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)
            .map_err(|e| BujoError::output(format!("write '{}': {e}", path.display())))
    }

    fn y(&self, top_down: f64) -> f64 {
        self.size.height - top_down
    }

    fn page(&mut self) -> BujoResult<&mut PageBuffer> {
        self.current
            .as_mut()
            .ok_or_else(|| BujoError::draw("drawing before the first page"))
    }

    fn set_fill(&mut self, color: Rgb8) -> BujoResult<()> {
        let page = self.page()?;
        if page.fill != Some(color) {
            let [r, g, b] = color.to_unit();
            page.ops
                .push(Operation::new("rg", vec![real(r), real(g), real(b)]));
            page.fill = Some(color);
        }
        Ok(())
    }

    fn flush_page(&mut self) -> BujoResult<()> {
        let Some(page) = self.current.take() else {
            return Ok(());
        };
        let content = Content {
            operations: page.ops,
        };
        let encoded = content
            .encode()
            .map_err(|e| BujoError::draw(format!("encode page content: {e}")))?;
        let content_id = self.doc.add_object(Stream::new(dictionary! {}, encoded));

        let mut dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "Contents" => content_id,
        };
        if !page.annots.is_empty() {
            let annots: Vec<Object> = page.annots.into_iter().map(Object::Reference).collect();
            dict.set("Annots", annots);
        }
        self.doc.objects.insert(page.id, Object::Dictionary(dict));
        self.kids.push(page.id);
        Ok(())
    }

    fn finalize(&mut self) -> BujoResult<()> {
        self.flush_page()?;
        if self.kids.is_empty() {
            return Err(BujoError::output("document has no pages"));
        }
        let dangling: Vec<String> = self
            .linked
            .iter()
            .filter(|h| !self.dests.contains_key(h))
            .map(|h| h.to_string())
            .collect();
        if !dangling.is_empty() {
            return Err(BujoError::anchor(format!(
                "links to unbound anchors: {}",
                dangling.join(", ")
            )));
        }

        let (regular, bold) = self.family.base_fonts();
        let regular_id = self.doc.add_object(font_dict(regular));
        let bold_id = self.doc.add_object(font_dict(bold));
        let resources_id = self.doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular_id,
                "F2" => bold_id,
            },
        });

        let count = i64::try_from(self.kids.len())
            .map_err(|_| BujoError::output("page count overflow"))?;
        let kids: Vec<Object> = self.kids.iter().copied().map(Object::Reference).collect();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![real(0.0), real(0.0), real(self.size.width), real(self.size.height)],
        };
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages));

        let mut dests = Dictionary::new();
        for (handle, page_id) in &self.dests {
            dests.set(
                handle.dest_name(),
                vec![Object::Reference(*page_id), Object::Name(b"Fit".to_vec())],
            );
        }
        let dests_id = self.doc.add_object(dests);

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
            "Dests" => dests_id,
        });
        let info_id = self.doc.add_object(dictionary! {
            "Title" => text_string(&self.info.title),
            "Author" => text_string(&self.info.author),
            "Producer" => text_string(concat!("bujo ", env!("CARGO_PKG_VERSION"))),
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc.trailer.set("Info", info_id);
        self.doc.compress();
        Ok(())
    }
}

impl Surface for PdfSurface {
    fn page_size(&self) -> Size {
        self.size
    }

    fn begin_page(&mut self) -> BujoResult<()> {
        self.flush_page()?;
        let id = self.doc.new_object_id();
        self.current = Some(PageBuffer {
            id,
            ops: Vec::new(),
            annots: Vec::new(),
            fill: None,
        });
        Ok(())
    }

    fn bind_anchor(&mut self, anchor: AnchorHandle) -> BujoResult<()> {
        let id = self
            .current
            .as_ref()
            .map(|p| p.id)
            .ok_or_else(|| BujoError::draw("binding an anchor before the first page"))?;
        if self.dests.contains_key(&anchor) {
            return Err(BujoError::anchor(format!("anchor {anchor} bound twice")));
        }
        self.dests.insert(anchor, id);
        Ok(())
    }

    fn set_font(&mut self, style: FontStyle, size: f64) {
        self.style = style;
        self.font_size = size;
    }

    fn set_text_color(&mut self, color: Rgb8) {
        self.text_color = color;
    }

    fn draw_text(&mut self, cell: Rect, text: &str, align: Align) -> BujoResult<()> {
        let encoded = encode_win_ansi(text);
        let width = encoded_width(self.family, self.style, self.font_size, &encoded);
        let x = match align {
            Align::Left => cell.x0 + CELL_PADDING,
            Align::Center => cell.x0 + (cell.width() - width) / 2.0,
            Align::Right => cell.x1 - CELL_PADDING - width,
        };
        let baseline = self.y(cell.center().y + BASELINE_SHIFT * self.font_size);
        let font = match self.style {
            FontStyle::Regular => "F1",
            FontStyle::Bold => "F2",
        };
        let size = self.font_size;

        self.set_fill(self.text_color)?;
        let page = self.page()?;
        page.ops.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![Object::Name(font.as_bytes().to_vec()), real(size)]),
            Operation::new("Td", vec![real(x), real(baseline)]),
            Operation::new("Tj", vec![Object::String(encoded, StringFormat::Literal)]),
            Operation::new("ET", vec![]),
        ]);
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64) -> BujoResult<()> {
        let center = Point::new(center.x, self.y(center.y));
        self.set_fill(Rgb8::BLACK)?;
        let page = self.page()?;
        let mut last = center;
        for el in Circle::new(center, radius).path_elements(CIRCLE_TOLERANCE) {
            match el {
                PathEl::MoveTo(p) => {
                    page.ops.push(Operation::new("m", vec![real(p.x), real(p.y)]));
                    last = p;
                }
                PathEl::LineTo(p) => {
                    page.ops.push(Operation::new("l", vec![real(p.x), real(p.y)]));
                    last = p;
                }
                PathEl::QuadTo(q, p) => {
                    // Degree-elevate to a cubic.
                    let c1 = last + (q - last) * (2.0 / 3.0);
                    let c2 = p + (q - p) * (2.0 / 3.0);
                    page.ops.push(curve(c1, c2, p));
                    last = p;
                }
                PathEl::CurveTo(c1, c2, p) => {
                    page.ops.push(curve(c1, c2, p));
                    last = p;
                }
                PathEl::ClosePath => page.ops.push(Operation::new("h", vec![])),
            }
        }
        page.ops.push(Operation::new("f", vec![]));
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect) -> BujoResult<()> {
        let bottom = self.y(rect.y1);
        let page = self.page()?;
        page.ops.extend([
            Operation::new("RG", vec![real(0.0), real(0.0), real(0.0)]),
            Operation::new("w", vec![real(RECT_LINE_WIDTH)]),
            Operation::new(
                "re",
                vec![
                    real(rect.x0),
                    real(bottom),
                    real(rect.width()),
                    real(rect.height()),
                ],
            ),
            Operation::new("S", vec![]),
        ]);
        Ok(())
    }

    fn link(&mut self, region: Rect, target: AnchorHandle) -> BujoResult<()> {
        let annot = dictionary! {
            "Type" => "Annot",
            "Subtype" => "Link",
            "Rect" => vec![
                real(region.x0),
                real(self.y(region.y1)),
                real(region.x1),
                real(self.y(region.y0)),
            ],
            "Border" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(0)],
            "Dest" => Object::Name(target.dest_name().into_bytes()),
        };
        self.page()?;
        let annot_id = self.doc.add_object(annot);
        self.page()?.annots.push(annot_id);
        self.linked.insert(target);
        Ok(())
    }
}

fn real(v: f64) -> Object {
    Object::Real(v as f32)
}

fn curve(c1: Point, c2: Point, p: Point) -> Operation {
    Operation::new(
        "c",
        vec![
            real(c1.x),
            real(c1.y),
            real(c2.x),
            real(c2.y),
            real(p.x),
            real(p.y),
        ],
    )
}

fn text_string(s: &str) -> Object {
    Object::String(encode_win_ansi(s), StringFormat::Literal)
}

fn font_dict(base: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => Object::Name(base.as_bytes().to_vec()),
        "Encoding" => "WinAnsiEncoding",
    }
}

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> BujoResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/draw/pdf.rs"]
mod tests;
