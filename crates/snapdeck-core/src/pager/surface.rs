/// The page as seen by the pager
///
/// A host (terminal renderer, DOM binding, test double) exposes scroll
/// geometry through this trait. Section offsets are looked up on every call
/// so layout changes are always picked up.
pub trait Surface {
    /// Current vertical scroll offset
    fn scroll_top(&self) -> f64;

    /// Height of the visible viewport
    fn viewport_height(&self) -> f64;

    /// Top offset of the element with the given identifier, if the host can locate it
    fn section_top(&self, id: &str) -> Option<f64>;

    /// Move the viewport. Hosts clamp to their scrollable range.
    fn set_scroll_top(&mut self, top: f64);
}
