/// Discrete input vocabulary of the viewer.
///
/// Each command is a total function over valid state; the surrounding input
/// loop translates raw events into these and feeds them in arrival order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewerCommand {
    ZoomIn,
    ZoomOut,
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ConstantRealUp,
    ConstantRealDown,
    ConstantImagUp,
    ConstantImagDown,
    Report,
    Quit,
}

/// What the surrounding loop should do after a command is applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Quit,
}
