//! The `permit` use case: decide a single code for one configured distributor.

use cityperm_settings::Overrides;

use crate::check::resolve;

#[derive(Clone, Debug)]
pub struct PermitInput<'a> {
    pub config_text: &'a str,
    pub overrides: Overrides,
    pub distributor: &'a str,
    pub code: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PermitOutput {
    Decided(bool),
    /// No distributor with that name; lists the configured names.
    UnknownDistributor { available: Vec<String> },
}

pub fn run_permit(input: PermitInput<'_>) -> anyhow::Result<PermitOutput> {
    let resolved = resolve(input.config_text, input.overrides)?;

    // Duplicate names resolve to the first configured entry.
    let output = match resolved.distributor(input.distributor) {
        Some(d) => PermitOutput::Decided(d.permits(input.code)),
        None => PermitOutput::UnknownDistributor {
            available: resolved
                .distributors
                .iter()
                .map(|d| d.name.clone())
                .collect(),
        },
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permit(distributor: &str, code: &str) -> PermitOutput {
        run_permit(PermitInput {
            config_text: "",
            overrides: Overrides::default(),
            distributor,
            code,
        })
        .expect("run_permit")
    }

    #[test]
    fn decides_against_sample_preset() {
        assert_eq!(
            permit("DISTRIBUTOR2", "CHENNAI-TAMILNADU-IN"),
            PermitOutput::Decided(false)
        );
        assert_eq!(
            permit("DISTRIBUTOR2", "BANGALORE-KARNATAKA-IN"),
            PermitOutput::Decided(true)
        );
        assert_eq!(
            permit("DISTRIBUTOR2", "US-NY"),
            PermitOutput::Decided(false)
        );
    }

    #[test]
    fn unknown_distributor_lists_available_names() {
        match permit("NOPE", "IN") {
            PermitOutput::UnknownDistributor { available } => {
                assert_eq!(
                    available,
                    vec!["DISTRIBUTOR1", "DISTRIBUTOR2", "DISTRIBUTOR3"]
                );
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }
}
