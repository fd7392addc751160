use crate::host::Node;

pub const MASK_CLASS: &str = "scrim-mask";
pub const SPINNER_CLASS: &str = "scrim-spinner";
pub const LABEL_CLASS: &str = "scrim-label";
pub const TRACK_CLASS: &str = "scrim-track";
pub const LINE_CLASS: &str = "scrim-line";

/// What the mounted mask contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayContent {
    Spinner { text: Option<String> },
    Bar,
}

impl OverlayContent {
    pub fn build(&self) -> Node {
        match self {
            OverlayContent::Spinner { text } => {
                let mut mask = Node::new(MASK_CLASS).child(Node::new(SPINNER_CLASS));
                if let Some(text) = text {
                    mask = mask.child(Node::with_text(LABEL_CLASS, text));
                }
                mask
            }
            OverlayContent::Bar => Node::new(MASK_CLASS)
                .child(Node::new(TRACK_CLASS).child(Node::new(LINE_CLASS))),
        }
    }
}
