/// Side effects requested by the event handler, performed by the main loop.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Fetch a new answer from the source and replace the displayed one.
    FetchAnswer,
    /// Leave the page.
    Quit,
}
