/// Read-only snapshot of a list for a presentation layer.
///
/// All element values are already projected to strings, so a renderer never
/// needs to know the element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub title: String,
    pub rows: Vec<RenderRow>,
    /// `None` when the list is empty.
    pub cursor: Option<usize>,
    pub grabbed: bool,
    pub help_visible: bool,
    pub submitted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    pub key: String,
    pub value: String,
    /// Row is under the cursor
    pub selected: bool,
    /// Row is under the cursor and being dragged
    pub grabbed: bool,
}
