//! Bulk-import CSV template for workshops.

pub const WORKSHOP_TEMPLATE_FILENAME: &str = "workshops_template.csv";

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

const WORKSHOP_TEMPLATE: &str = "Title,Type,Description,CoordinatorEmail,DateTime\n\
Sample Workshop,WORKSHOP,Sample Description,coordinator@yugam.in,2024-12-25T10:00:00\n\
AI Workshop,WORKSHOP,Artificial Intelligence workshop,ai@yugam.in,2024-12-26T09:00:00";

/// A file served as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDownload {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub body: &'static str,
}

impl CsvDownload {
    pub fn workshop_template() -> Self {
        Self {
            filename: WORKSHOP_TEMPLATE_FILENAME,
            content_type: CSV_CONTENT_TYPE,
            body: WORKSHOP_TEMPLATE,
        }
    }

    /// `Content-Disposition` header value.
    pub fn disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_lines() {
        let csv = CsvDownload::workshop_template();
        let lines: Vec<_> = csv.body.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Title,Type,Description,CoordinatorEmail,DateTime");
        assert_eq!(
            lines[1],
            "Sample Workshop,WORKSHOP,Sample Description,coordinator@yugam.in,2024-12-25T10:00:00"
        );
        assert_eq!(
            lines[2],
            "AI Workshop,WORKSHOP,Artificial Intelligence workshop,ai@yugam.in,2024-12-26T09:00:00"
        );
        assert_eq!(
            csv.disposition(),
            "attachment; filename=\"workshops_template.csv\""
        );
    }
}
