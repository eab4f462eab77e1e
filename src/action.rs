/// Panels whose chart can be collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Cpu,
    Memory,
    Gpu,
    Disk,
    Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleChart(Panel),
    ToggleHelp,
    Refresh,
    None,
}
