// src/vocab/state.rs

use super::Vocabulary;

vocabulary! {
    /// US state, district or inhabited territory, named by postal abbreviation.
    pub enum UsState {
        Alabama => "AL",
        Alaska => "AK",
        Arizona => "AZ",
        Arkansas => "AR",
        California => "CA",
        Colorado => "CO",
        Connecticut => "CT",
        Delaware => "DE",
        DistrictOfColumbia => "DC",
        Florida => "FL",
        Georgia => "GA",
        Hawaii => "HI",
        Idaho => "ID",
        Illinois => "IL",
        Indiana => "IN",
        Iowa => "IA",
        Kansas => "KS",
        Kentucky => "KY",
        Louisiana => "LA",
        Maine => "ME",
        Maryland => "MD",
        Massachusetts => "MA",
        Michigan => "MI",
        Minnesota => "MN",
        Mississippi => "MS",
        Missouri => "MO",
        Montana => "MT",
        Nebraska => "NE",
        Nevada => "NV",
        NewHampshire => "NH",
        NewJersey => "NJ",
        NewMexico => "NM",
        NewYork => "NY",
        NorthCarolina => "NC",
        NorthDakota => "ND",
        Ohio => "OH",
        Oklahoma => "OK",
        Oregon => "OR",
        Pennsylvania => "PA",
        RhodeIsland => "RI",
        SouthCarolina => "SC",
        SouthDakota => "SD",
        Tennessee => "TN",
        Texas => "TX",
        Utah => "UT",
        Vermont => "VT",
        Virginia => "VA",
        Washington => "WA",
        WestVirginia => "WV",
        Wisconsin => "WI",
        Wyoming => "WY",
        AmericanSamoa => "AS",
        Guam => "GU",
        NorthernMarianaIslands => "MP",
        PuertoRico => "PR",
        VirginIslands => "VI",
    }
}

/// (state, full name, FIPS code)
const STATE_INFO: &[(UsState, &str, &str)] = &[
    (UsState::Alabama, "Alabama", "01"),
    (UsState::Alaska, "Alaska", "02"),
    (UsState::Arizona, "Arizona", "04"),
    (UsState::Arkansas, "Arkansas", "05"),
    (UsState::California, "California", "06"),
    (UsState::Colorado, "Colorado", "08"),
    (UsState::Connecticut, "Connecticut", "09"),
    (UsState::Delaware, "Delaware", "10"),
    (UsState::DistrictOfColumbia, "District of Columbia", "11"),
    (UsState::Florida, "Florida", "12"),
    (UsState::Georgia, "Georgia", "13"),
    (UsState::Hawaii, "Hawaii", "15"),
    (UsState::Idaho, "Idaho", "16"),
    (UsState::Illinois, "Illinois", "17"),
    (UsState::Indiana, "Indiana", "18"),
    (UsState::Iowa, "Iowa", "19"),
    (UsState::Kansas, "Kansas", "20"),
    (UsState::Kentucky, "Kentucky", "21"),
    (UsState::Louisiana, "Louisiana", "22"),
    (UsState::Maine, "Maine", "23"),
    (UsState::Maryland, "Maryland", "24"),
    (UsState::Massachusetts, "Massachusetts", "25"),
    (UsState::Michigan, "Michigan", "26"),
    (UsState::Minnesota, "Minnesota", "27"),
    (UsState::Mississippi, "Mississippi", "28"),
    (UsState::Missouri, "Missouri", "29"),
    (UsState::Montana, "Montana", "30"),
    (UsState::Nebraska, "Nebraska", "31"),
    (UsState::Nevada, "Nevada", "32"),
    (UsState::NewHampshire, "New Hampshire", "33"),
    (UsState::NewJersey, "New Jersey", "34"),
    (UsState::NewMexico, "New Mexico", "35"),
    (UsState::NewYork, "New York", "36"),
    (UsState::NorthCarolina, "North Carolina", "37"),
    (UsState::NorthDakota, "North Dakota", "38"),
    (UsState::Ohio, "Ohio", "39"),
    (UsState::Oklahoma, "Oklahoma", "40"),
    (UsState::Oregon, "Oregon", "41"),
    (UsState::Pennsylvania, "Pennsylvania", "42"),
    (UsState::RhodeIsland, "Rhode Island", "44"),
    (UsState::SouthCarolina, "South Carolina", "45"),
    (UsState::SouthDakota, "South Dakota", "46"),
    (UsState::Tennessee, "Tennessee", "47"),
    (UsState::Texas, "Texas", "48"),
    (UsState::Utah, "Utah", "49"),
    (UsState::Vermont, "Vermont", "50"),
    (UsState::Virginia, "Virginia", "51"),
    (UsState::Washington, "Washington", "53"),
    (UsState::WestVirginia, "West Virginia", "54"),
    (UsState::Wisconsin, "Wisconsin", "55"),
    (UsState::Wyoming, "Wyoming", "56"),
    (UsState::AmericanSamoa, "American Samoa", "60"),
    (UsState::Guam, "Guam", "66"),
    (UsState::NorthernMarianaIslands, "Northern Mariana Islands", "69"),
    (UsState::PuertoRico, "Puerto Rico", "72"),
    (UsState::VirginIslands, "Virgin Islands", "78"),
];

impl UsState {
    /// Two-letter postal abbreviation (same as the symbolic name).
    pub fn abbr(self) -> &'static str {
        self.name()
    }

    pub fn full_name(self) -> &'static str {
        self.info().1
    }

    pub fn fips(self) -> &'static str {
        self.info().2
    }

    fn info(self) -> &'static (UsState, &'static str, &'static str) {
        // STATE_INFO is declared in the same order as the enum.
        &STATE_INFO[self as usize]
    }

    /// Iterate `(state, full name, fips)` rows.
    pub fn table() -> impl Iterator<Item = (UsState, &'static str, &'static str)> {
        STATE_INFO.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_table_matches_declaration_order() {
        assert_eq!(STATE_INFO.len(), UsState::ALL.len());
        for (i, (st, _, _)) in STATE_INFO.iter().enumerate() {
            assert_eq!(*st as usize, i, "{st:?} out of order");
        }
    }

    #[test]
    fn accessors() {
        assert_eq!(UsState::NewJersey.abbr(), "NJ");
        assert_eq!(UsState::NewJersey.full_name(), "New Jersey");
        assert_eq!(UsState::DistrictOfColumbia.fips(), "11");
    }
}
