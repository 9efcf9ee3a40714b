#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDecision {
    pub city: String,
    pub province: String,
    pub country: String,
    pub permitted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableBlock {
    pub name: String,
    pub permitted: u64,
    pub decisions: Vec<RenderableDecision>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableData {
    pub locations_scanned: u64,
    pub decisions_total: u64,
    pub permitted_total: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub blocks: Vec<RenderableBlock>,
    pub data: RenderableData,
}
