use crate::domain::models::{booking::Booking, settings::PropertySettings};
use crate::domain::ports::DocumentService;
use crate::error::AppError;
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Renders invoices and receipts as single-page PDFs under a storage
/// directory and hands the path back.
pub struct PdfDocumentService {
    base_dir: PathBuf,
}

impl PdfDocumentService {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    fn write(&self, file_name: &str, lines: &[String]) -> Result<String, AppError> {
        fs::create_dir_all(&self.base_dir)
            .map_err(|e| AppError::Upstream(format!("Document storage unavailable: {}", e)))?;
        let path = self.base_dir.join(file_name);
        fs::write(&path, render_pdf(lines))
            .map_err(|e| AppError::Upstream(format!("Failed to write document: {}", e)))?;
        Ok(path.to_string_lossy().into_owned())
    }
}

fn money(amount: f64) -> String {
    format!("Rs. {:.2}", amount)
}

fn invoice_lines(booking: &Booking, settings: &PropertySettings, invoice_number: &str) -> Vec<String> {
    let mut lines = vec![
        settings.name.clone(),
        settings.address.clone(),
        settings
            .gst_number
            .as_deref()
            .map(|g| format!("GSTIN: {}", g))
            .unwrap_or_default(),
        String::new(),
        "TAX INVOICE".to_string(),
        format!("Invoice No: {}", invoice_number),
        format!("Invoice Date: {}", booking.invoice_date.as_deref().unwrap_or("")),
        String::new(),
        format!("Guest: {}", booking.guest_name),
        format!("Room: {}", booking.room_number.as_deref().unwrap_or("Unassigned")),
        format!("Stay: {} to {}", booking.check_in, booking.check_out),
        String::new(),
    ];

    let room_amount = booking.amount.unwrap_or(0.0);
    lines.push(format!("Room charges: {}", money(room_amount)));

    let mut folio_total = 0.0;
    for item in &booking.folio {
        folio_total += item.amount;
        lines.push(format!("{}: {}", item.description, money(item.amount)));
    }

    let gross = room_amount + folio_total;
    let taxable = gross / (1.0 + settings.gst_rate / 100.0);
    let tax = gross - taxable;
    lines.push(String::new());
    lines.push(format!("Taxable value: {}", money(taxable)));
    lines.push(format!("CGST ({:.2}%): {}", settings.gst_rate / 2.0, money(tax / 2.0)));
    lines.push(format!("SGST ({:.2}%): {}", settings.gst_rate / 2.0, money(tax / 2.0)));
    lines.push(format!("Grand total: {}", money(gross)));
    lines
}

fn receipt_lines(booking: &Booking, settings: &PropertySettings, invoice_number: &str) -> Vec<String> {
    let mut lines = vec![
        settings.name.clone(),
        settings.address.clone(),
        String::new(),
        "PAYMENT RECEIPT".to_string(),
        format!("Against Invoice: {}", invoice_number),
        format!("Guest: {}", booking.guest_name),
        String::new(),
    ];

    let mut total = 0.0;
    for payment in &booking.payments {
        total += payment.amount;
        lines.push(format!(
            "{} ({}): {}",
            payment.method.as_str(),
            payment.status.as_str(),
            money(payment.amount)
        ));
    }
    for item in booking.folio.iter().filter(|i| i.is_paid) {
        total += item.amount;
        lines.push(format!(
            "{} ({}): {}",
            item.description,
            item.payment_method.as_deref().unwrap_or("Paid"),
            money(item.amount)
        ));
    }
    lines.push(String::new());
    lines.push(format!("Total received: {}", money(total)));
    lines
}

fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\").replace('(', "\\(").replace(')', "\\)")
}

/// Minimal single-page PDF: Helvetica text lines on A4, one object per
/// structural element, cross-reference table by byte offset.
fn render_pdf(lines: &[String]) -> Vec<u8> {
    let mut content = String::from("BT\n/F1 11 Tf\n50 792 Td\n14 TL\n");
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            content.push_str("T*\n");
        }
        content.push_str(&format!("({}) Tj\n", escape_text(line)));
    }
    content.push_str("ET\n");

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 595 842] /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>".to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        format!("<< /Length {} >>\nstream\n{}endstream", content.len(), content),
    ];

    let mut out = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );
    out
}

#[async_trait]
impl DocumentService for PdfDocumentService {
    async fn generate_invoice(
        &self,
        booking: &Booking,
        settings: &PropertySettings,
        invoice_number: &str,
    ) -> Result<String, AppError> {
        let path = self.write(
            &format!("{}.pdf", invoice_number),
            &invoice_lines(booking, settings, invoice_number),
        )?;
        info!("Rendered invoice {} at {}", invoice_number, path);
        Ok(path)
    }

    async fn generate_receipt(
        &self,
        booking: &Booking,
        settings: &PropertySettings,
        invoice_number: &str,
    ) -> Result<String, AppError> {
        let path = self.write(
            &format!("{}-receipt.pdf", invoice_number),
            &receipt_lines(booking, settings, invoice_number),
        )?;
        info!("Rendered receipt for {} at {}", invoice_number, path);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_wellformed_pdf() {
        let bytes = render_pdf(&["Hello".to_string(), "World (escaped)".to_string()]);
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(bytes.ends_with(b"%%EOF\n"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("(World \\(escaped\\)) Tj"));
        assert!(text.contains("startxref"));
    }
}
