use anyhow::Result;
use qrcode::{QrCode, render::svg};

use super::layout::escape;

const LABEL_SIZE_PX: u32 = 160;

/// Printable shipping label: a QR symbol of the barcode plus the sender
/// references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    pub barcode: String,
    pub user_id: String,
    pub file_id: String,
}

impl Label {
    pub fn render(&self) -> Result<String> {
        let symbol = qr_svg(&self.barcode)?;

        Ok(format!(
            r#"<div class="label" style="border: 1px solid black; padding: 1rem; display: flex; justify-content: space-around">
{symbol}
<div>
<p style="margin: 0">Barcode: {barcode}</p>
<p style="margin: 0">User ID: {user_id}</p>
<p style="margin: 0">File No: {file_id}</p>
</div>
</div>"#,
            barcode = escape(&self.barcode),
            user_id = escape(&self.user_id),
            file_id = escape(&self.file_id),
        ))
    }
}

/// Encodes `text` as an inline SVG QR code.
pub fn qr_svg(text: &str) -> Result<String> {
    let code = QrCode::new(text.as_bytes())?;

    let image = code
        .render::<svg::Color>()
        .min_dimensions(LABEL_SIZE_PX, LABEL_SIZE_PX)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    // Drop the XML prolog so the symbol can sit inline in an HTML document.
    Ok(match image.find("<svg") {
        Some(start) => image[start..].to_string(),
        None => image,
    })
}
