//! Integration tests for record normalisation and aggregation

use isoyield_chart::{
    cell_index, mass_and_state, parse_record, Error, IonSource, IsomerState, Isotope,
    NuclideTable, StagedRecord, Target, MIN_FIELDS,
};
use rstest::{fixture, rstest};

/// Two measurements on the (N=10, Z=20) cell
#[fixture]
fn calcium() -> NuclideTable {
    let mut table = NuclideTable::new();
    for line in ["20 30Ca 5.0 1 TRILIS", "20 30Ca 15.0 1 FEBIAD"] {
        let record = StagedRecord::new(line, Target::TiC);
        table.insert(parse_record(&record).unwrap()).unwrap();
    }
    table
}

#[rstest]
#[case("50 132Sn 1.2E+03 500 TRILIS", 50, 82, IsomerState::Ground)]
#[case("40 99Zrm1 3.5E+05 9 Re", 40, 59, IsomerState::Excited(1))]
#[case("72 178Hfm2 1.0E+01 10 FEBIAD", 72, 106, IsomerState::Excited(2))]
#[case("62 150Sm 1.0E+01 10 IG-LIS", 62, 88, IsomerState::Ground)]
#[case("11 Na26 1.0E+01 10 Ta", 11, 15, IsomerState::Ground)]
fn derive_isotope(
    #[case] line: &str,
    #[case] z: i32,
    #[case] n: i32,
    #[case] state: IsomerState,
) {
    let m = parse_record(&StagedRecord::new(line, Target::U)).unwrap();
    assert_eq!(m.isotope.z, z);
    assert_eq!(m.isotope.n, n);
    assert_eq!(m.isotope.n, m.isotope.mass() - m.isotope.z);
    assert_eq!(m.state, state);
}

#[rstest]
#[case("132Sn", 132, 1)]
#[case("99Zrm1", 99, 2)]
#[case("99Zr", 99, 1)]
#[case("178Hfm2", 178, 3)]
fn mass_token(#[case] token: &str, #[case] mass: i32, #[case] level: u8) {
    let (a, state) = mass_and_state(token);
    assert_eq!(a, mass);
    assert_eq!(state.level(), level);
}

#[rstest]
#[case("Sn132", 50, 82)]
#[case("99Zrm1", 40, 59)]
#[case("89Ym1", 39, 50)]
#[case("Y89m1", 39, 50)]
#[case("238Um1", 92, 146)]
#[case("145Pm", 61, 84)]
#[case("32Pm1", 15, 17)]
fn isotope_from_name(#[case] name: &str, #[case] z: i32, #[case] n: i32) {
    let isotope: Isotope = name.parse().unwrap();
    assert_eq!(isotope, Isotope { z, n });
}

#[test]
fn malformed_numbers_are_zero() {
    let record = StagedRecord::new("abc 132Sn lots many TRILIS", Target::Nb);
    let m = parse_record(&record).unwrap();

    assert_eq!(m.isotope.z, 0);
    assert_eq!(m.isotope.n, 132);
    assert_eq!(m.intensity, 0.0);
    assert_eq!(m.proton_current, 0);
    assert_eq!(m.target, Target::Nb);
}

#[test]
fn extra_fields_ignored() {
    let record = StagedRecord::new("37 80Rb 2.0E+07 2 Ta surface some comment", Target::ZrC);
    let m = parse_record(&record).unwrap();
    assert_eq!(m.ion_source, "Ta surface");
    assert_eq!(m.source(), IonSource::TaSurface);
}

#[rstest]
#[case("")]
#[case("50")]
#[case("50 132Sn 1.2E+03 500")]
fn short_records_rejected(#[case] line: &str) {
    let record = StagedRecord::new(line, Target::U);
    match parse_record(&record) {
        Err(Error::MalformedRecord { found, expected }) => {
            assert_eq!(found, record.tokens.len());
            assert_eq!(expected, MIN_FIELDS);
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn off_chart_records_rejected() {
    let mut table = NuclideTable::new();

    // A < Z gives a negative neutron number
    let record = StagedRecord::new("20 10Ca 1.0 1 FEBIAD", Target::U);
    let result = table.insert(parse_record(&record).unwrap());
    assert!(matches!(result, Err(Error::InvalidIsotope { n: -10, z: 20 })));

    // Z beyond plutonium
    let record = StagedRecord::new("95 243Am 1.0 1 FEBIAD", Target::U);
    assert!(table.insert(parse_record(&record).unwrap()).is_err());

    assert_eq!(table.n_measurements(), 0);
}

#[test]
fn chart_bounds() {
    assert!(cell_index(1, 1).is_ok());
    assert!(cell_index(146, 94).is_ok());
    assert!(cell_index(147, 94).is_err());
    assert!(cell_index(146, 95).is_err());
    assert_eq!(cell_index(1, 1).unwrap().isotope().mass(), 2);
}

#[rstest]
#[case("Re surface", IonSource::ReSurface)]
#[case("Ta surface", IonSource::TaSurface)]
#[case("TRILIS", IonSource::Trilis)]
#[case("IG-LIS", IonSource::IgLis)]
#[case("FEBIAD", IonSource::Febiad)]
#[case("All", IonSource::All)]
#[case("", IonSource::All)]
#[case("febiad", IonSource::All)]
#[case("Re", IonSource::All)]
#[case("Ion source", IonSource::All)]
fn classify_ion_source(#[case] label: &str, #[case] source: IonSource) {
    assert_eq!(IonSource::classify(label), source);
}

#[test]
fn ion_source_ids() {
    for (id, source) in IonSource::ALL.iter().enumerate() {
        assert_eq!(source.id() as usize, id);
        assert_eq!(IonSource::try_from(id as u8).unwrap(), *source);
        assert_eq!(IonSource::classify(source.label()), *source);
    }
    assert!(matches!(
        IonSource::try_from(6),
        Err(Error::UnknownIonSource(6))
    ));
}

#[rstest]
#[case(None, 10.0, 15.0)]
#[case(Some(IonSource::All), 10.0, 15.0)]
#[case(Some(IonSource::Trilis), 5.0, 5.0)]
#[case(Some(IonSource::Febiad), 15.0, 15.0)]
#[case(Some(IonSource::IgLis), 0.0, 0.0)]
fn filtered_aggregation(
    mut calcium: NuclideTable,
    #[case] filter: Option<IonSource>,
    #[case] average: f64,
    #[case] maximum: f64,
) {
    calcium.recompute(filter);
    let cell = calcium.cell(10, 20).unwrap();
    assert_eq!(cell.average(), average);
    assert_eq!(cell.maximum(), maximum);
}

#[rstest]
fn aggregation_matches_manual_mean(calcium: NuclideTable) {
    let cell = calcium.cell(10, 20).unwrap();

    for source in IonSource::ALL {
        let yields: Vec<f64> = cell
            .measurements()
            .iter()
            .filter(|m| source == IonSource::All || IonSource::classify(&m.ion_source) == source)
            .map(|m| m.intensity)
            .collect();

        let expected = match yields.len() {
            0 => 0.0,
            n => yields.iter().sum::<f64>() / n as f64,
        };

        assert_eq!(cell.aggregate(Some(source)).average, expected);
    }
}

#[rstest]
fn aggregation_is_idempotent(mut calcium: NuclideTable) {
    calcium.recompute(Some(IonSource::Trilis));
    let first = calcium.aggregates();
    calcium.recompute(Some(IonSource::Trilis));
    assert_eq!(first, calcium.aggregates());
}

#[rstest]
fn clear_empties_cells(mut calcium: NuclideTable) {
    calcium.recompute(None);
    calcium.clear();

    let cell = calcium.cell(10, 20).unwrap();
    assert!(cell.is_empty());
    assert_eq!(cell.n_states(), 0);
    assert_eq!(cell.average(), 0.0);
    assert_eq!(cell.maximum(), 0.0);
}
