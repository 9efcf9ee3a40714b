/// One (distributor, location) decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationResult {
    pub distributor: String,
    pub code: String,
    pub city: String,
    pub province: String,
    pub country: String,
    pub permitted: bool,
}

/// Results for one distributor, in catalog order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultBlock {
    pub distributor: String,
    pub results: Vec<EvaluationResult>,
}

impl ResultBlock {
    pub fn permitted_count(&self) -> usize {
        self.results.iter().filter(|r| r.permitted).count()
    }
}

/// Aggregated blocks in distributor submission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DomainReport {
    pub blocks: Vec<ResultBlock>,
}

impl DomainReport {
    pub fn decisions_total(&self) -> usize {
        self.blocks.iter().map(|b| b.results.len()).sum()
    }

    pub fn permitted_total(&self) -> usize {
        self.blocks.iter().map(ResultBlock::permitted_count).sum()
    }

    pub fn distributor_names(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.distributor.as_str()).collect()
    }
}
