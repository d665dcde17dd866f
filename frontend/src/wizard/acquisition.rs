//! Single-file acquisition for the resume drop zone.
//!
//! Drag-and-drop ([`FileAcquisition::drop_file`]) and the file picker
//! ([`FileAcquisition::pick_file`]) share one acceptance check;
//! only PDFs are accepted and a new file always replaces the held one.

use std::rc::Rc;

use crate::PDF_MIME;

/// A file the user handed to the wizard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcquiredFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Rc<[u8]>,
}

impl AcquiredFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: impl Into<Rc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// How a file reached the drop zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcquisitionSource {
    Drop,
    Picker,
}

/// Outcome of an acquisition attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Acquisition {
    Accepted,
    Rejected(RejectReason),
}

impl Acquisition {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Acquisition::Accepted)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Declared MIME type is not `application/pdf`.
    UnsupportedType(String),
}

impl RejectReason {
    /// Hint shown under the drop zone.
    pub fn hint(&self) -> String {
        match self {
            RejectReason::UnsupportedType(mime) if mime.is_empty() => {
                "Only PDF files are accepted".to_string()
            }
            RejectReason::UnsupportedType(mime) => {
                format!("Only PDF files are accepted (got {})", mime)
            }
        }
    }
}

/// Drop-zone state: the held file plus the purely visual drag flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileAcquisition {
    held: Option<AcquiredFile>,
    drag_active: bool,
}

impl FileAcquisition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> Option<&AcquiredFile> {
        self.held.as_ref()
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Check a declared MIME type before reading any bytes.
    pub fn accepts(mime_type: &str) -> Result<(), RejectReason> {
        if mime_type == PDF_MIME {
            Ok(())
        } else {
            Err(RejectReason::UnsupportedType(mime_type.to_string()))
        }
    }

    /// Drag-enter and drag-over.
    pub fn drag_over(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// A drop always ends the drag, even when the file is refused.
    pub fn drop_file(&mut self, file: AcquiredFile) -> Acquisition {
        self.drag_active = false;
        self.acquire(file, AcquisitionSource::Drop)
    }

    pub fn pick_file(&mut self, file: AcquiredFile) -> Acquisition {
        self.acquire(file, AcquisitionSource::Picker)
    }

    /// Route a file to [`drop_file`](Self::drop_file) or [`pick_file`](Self::pick_file).
    pub fn receive(&mut self, file: AcquiredFile, source: AcquisitionSource) -> Acquisition {
        match source {
            AcquisitionSource::Drop => self.drop_file(file),
            AcquisitionSource::Picker => self.pick_file(file),
        }
    }

    fn acquire(&mut self, file: AcquiredFile, source: AcquisitionSource) -> Acquisition {
        if let Err(reason) = Self::accepts(&file.mime_type) {
            log::debug!("Rejected {:?} from {:?}: {}", file.name, source, reason.hint());
            return Acquisition::Rejected(reason);
        }
        log::info!("📄 Resume selected: {} ({} bytes)", file.name, file.size());
        self.held = Some(file);
        Acquisition::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str) -> AcquiredFile {
        AcquiredFile::new(name, "application/pdf", b"%PDF-1.7".to_vec())
    }

    #[test]
    fn pdf_is_accepted() {
        let mut zone = FileAcquisition::new();
        assert!(zone.pick_file(pdf("cv.pdf")).is_accepted());
        assert_eq!(zone.held().map(|f| f.name.as_str()), Some("cv.pdf"));
    }

    #[test]
    fn png_leaves_held_file_unchanged() {
        let mut zone = FileAcquisition::new();
        zone.pick_file(pdf("cv.pdf"));

        let png = AcquiredFile::new("photo.png", "image/png", vec![0x89, b'P', b'N', b'G']);
        let outcome = zone.drop_file(png);

        assert_eq!(
            outcome,
            Acquisition::Rejected(RejectReason::UnsupportedType("image/png".into()))
        );
        assert_eq!(zone.held(), Some(&pdf("cv.pdf")));
    }

    #[test]
    fn new_pdf_replaces_previous() {
        let mut zone = FileAcquisition::new();
        zone.pick_file(pdf("old.pdf"));
        zone.drop_file(pdf("new.pdf"));
        assert_eq!(zone.held().map(|f| f.name.as_str()), Some("new.pdf"));
    }

    #[test]
    fn drag_flag_follows_enter_leave_and_drop() {
        let mut zone = FileAcquisition::new();
        zone.drag_over();
        assert!(zone.drag_active());
        zone.drag_leave();
        assert!(!zone.drag_active());

        zone.drag_over();
        zone.drop_file(AcquiredFile::new("notes.txt", "text/plain", Vec::<u8>::new()));
        assert!(!zone.drag_active());
    }

    #[test]
    fn receive_dispatches_by_source() {
        let mut zone = FileAcquisition::new();
        zone.drag_over();
        assert!(zone.receive(pdf("picked.pdf"), AcquisitionSource::Picker).is_accepted());
        assert!(zone.drag_active());

        assert!(zone.receive(pdf("dropped.pdf"), AcquisitionSource::Drop).is_accepted());
        assert!(!zone.drag_active());
        assert_eq!(zone.held().map(|f| f.name.as_str()), Some("dropped.pdf"));
    }

    #[test]
    fn accepts_is_exact_match() {
        assert!(FileAcquisition::accepts("application/pdf").is_ok());
        assert!(FileAcquisition::accepts("application/pdf; charset=binary").is_err());
        assert!(FileAcquisition::accepts("").is_err());
    }

    #[test]
    fn hint_mentions_declared_type() {
        let reason = RejectReason::UnsupportedType("image/png".into());
        assert!(reason.hint().contains("image/png"));
        assert_eq!(
            RejectReason::UnsupportedType(String::new()).hint(),
            "Only PDF files are accepted"
        );
    }
}
