use crate::policy::scenario::{
    ChargerMix, FleetSegment, InvestmentAppetite, PolicyPriority, RegulatoryFlexibility,
    ScenarioParameters, UrbanRuralSplit,
};
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct ScenarioRecord {
    pub(crate) name: Option<String>,
    pub(crate) scenario: ScenarioParameters,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ScenarioRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<ScenarioRow>() {
        let row = record?;
        records.push(row.into_record());
    }

    Ok(records)
}

/// One CSV row. Header names follow the scenario field names; labels use the
/// same display strings as the JSON form.
#[derive(Debug, Deserialize)]
struct ScenarioRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    total_evs: u32,
    public_chargers: u32,
    two_wheeler_share: f64,
    peak_charging_share: f64,
    #[serde(default)]
    ev_growth: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    policy_priority: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    investment_appetite: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    regulatory_flexibility: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    stakeholder: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    charger_types: Option<String>,
    #[serde(default)]
    solar_integration: Option<f64>,
    #[serde(default)]
    v2g_adoption: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    fleet_mix: Option<String>,
    #[serde(default)]
    urban_share: Option<f64>,
}

impl ScenarioRow {
    fn into_record(self) -> ScenarioRecord {
        let scenario = ScenarioParameters {
            total_evs: self.total_evs,
            public_chargers: self.public_chargers,
            ev_growth: self.ev_growth,
            two_wheeler_share: self.two_wheeler_share,
            peak_charging_share: self.peak_charging_share,
            policy_priority: self.policy_priority.as_deref().map(PolicyPriority::from_label),
            investment_appetite: self
                .investment_appetite
                .as_deref()
                .map(InvestmentAppetite::from_label),
            regulatory_flexibility: self
                .regulatory_flexibility
                .as_deref()
                .map(RegulatoryFlexibility::from_label),
            stakeholder: self.stakeholder,
            charger_types: self.charger_types.as_deref().map(ChargerMix::from_label),
            solar_integration: self.solar_integration,
            v2g_adoption: self.v2g_adoption,
            fleet_mix: self
                .fleet_mix
                .as_deref()
                .map(split_fleet_mix)
                .unwrap_or_default(),
            urban_rural_split: self.urban_share.map(UrbanRuralSplit::from_urban),
        };

        ScenarioRecord {
            name: self.name,
            scenario: scenario.clamped(),
        }
    }
}

fn split_fleet_mix(raw: &str) -> Vec<FleetSegment> {
    raw.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(FleetSegment::from_label)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_mix_splits_on_semicolons_and_skips_blanks() {
        let segments = split_fleet_mix("E-Motos; Taxis;;Buses ");
        assert_eq!(
            segments,
            vec![FleetSegment::EMotos, FleetSegment::Taxis, FleetSegment::Buses]
        );
    }
}
