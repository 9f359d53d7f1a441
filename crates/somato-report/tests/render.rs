use somato_core::models::payload::ReportPayload;
use somato_report::render::render_report;
use somato_report::styles::ReportStyles;

fn payload(json: &str) -> ReportPayload {
    ReportPayload::from_json(json).unwrap()
}

const FULL: &str = r#"{
    "user": { "clinicaNome": "Clínica Vida" },
    "paciente": {
        "nome": "Maria Souza",
        "sexo": 70,
        "estaturaCm": 172.0,
        "dataNascimento": "1990-06-15",
        "email": "maria@example.com"
    },
    "avaliacoes": [
        {
            "data": "2024-04-02T09:15:00",
            "peso": 83.1
        },
        {
            "data": "2024-05-10T10:30:00",
            "peso": 82.4,
            "taxaMetabolicaBasal": 1650,
            "idadeMetabolica": 35,
            "dadosCorpo": {
                "bmi": 22.0,
                "fm": 24.1,
                "ffm": 58.3,
                "fmPercentual": 29.2,
                "tbw": 42.7,
                "ssm": 31.9,
                "vfl": 7,
                "pesoMin": 58.0,
                "pesoMax": 73.0
            },
            "dadosMembros": [
                { "composicaoCorporal": { "ffm": 2.9, "fm": 1.1 } },
                { "composicaoCorporal": { "ffm": 2.8, "fm": 1.2 } },
                { "composicaoCorporal": { "ffm": 27.4, "fm": 12.3 } },
                { "composicaoCorporal": { "ffm": 9.6, "fm": 4.2 } },
                { "composicaoCorporal": { "ffm": 9.5, "fm": 4.3 } }
            ],
            "dadosFrequencia": [
                { "frequency": 50, "impedanceRightArm": 287.5 }
            ]
        }
    ]
}"#;

#[test]
fn report_contains_patient_block() {
    let html = render_report(&payload(FULL), &ReportStyles::default()).unwrap();

    assert!(html.contains("Maria Souza"));
    assert!(html.contains("1,72"));
    assert!(html.contains("10/05/2024"));
    assert!(html.contains("maria@example.com"));
    assert!(html.contains("Sexo:</span>F"));
}

#[test]
fn summary_values_use_comma_decimals() {
    let html = render_report(&payload(FULL), &ReportStyles::default()).unwrap();

    assert!(html.contains("82,4 kg"));
    assert!(html.contains("29,2 %"));
    assert!(html.contains("42,7 L"));
}

#[test]
fn bmi_bar_marker_sits_at_the_reference_position() {
    let html = render_report(&payload(FULL), &ReportStyles::default()).unwrap();

    // value 22.0 against the fixed 18.5–24.9 band
    assert!(html.contains("left: 32.84%"));
    // tick labels at the band bounds
    assert!(html.contains("18,5"));
    assert!(html.contains("24,9"));
}

#[test]
fn metric_without_band_renders_without_a_bar() {
    let html = render_report(&payload(FULL), &ReportStyles::default()).unwrap();

    // weight has a band from pesoMin/pesoMax; muscle mass has none
    let muscle_section = html.split("Massa Muscular").nth(1).unwrap();
    let next_row = muscle_section.split("Água Total").next().unwrap();
    assert!(!next_row.contains("barra-marcador"));
    assert!(next_row.contains("-"));
}

#[test]
fn limb_panels_show_both_sides() {
    let html = render_report(&payload(FULL), &ReportStyles::default()).unwrap();

    assert!(html.contains("58,3 kg"));
    assert!(html.contains("24,1 kg"));
    assert!(html.contains("27,4"));
    assert!(html.contains("9,5"));
}

#[test]
fn metabolism_and_impedance_sections_render() {
    let html = render_report(&payload(FULL), &ReportStyles::default()).unwrap();

    assert!(html.contains("1650 kcal"));
    assert!(html.contains("35 anos"));
    assert!(html.contains("Nível 7"));
    assert!(html.contains("288")); // 287.5 at 0 decimals
}

#[test]
fn weight_history_chart_needs_two_points() {
    let html = render_report(&payload(FULL), &ReportStyles::default()).unwrap();
    assert!(html.contains("Histórico de Peso"));
    assert!(html.contains("<polyline"));
    assert!(html.contains("83,1"));

    let single = r#"{ "paciente": {}, "avaliacoes": [ { "peso": 82.4 } ] }"#;
    let html = render_report(&payload(single), &ReportStyles::default()).unwrap();
    assert!(!html.contains("Histórico de Peso"));
}

#[test]
fn missing_metrics_degrade_to_dashes_not_failures() {
    let sparse = r#"{ "paciente": {}, "avaliacoes": [ {} ] }"#;
    let html = render_report(&payload(sparse), &ReportStyles::default()).unwrap();

    assert!(html.contains("Nome:</span>-"));
    assert!(html.contains("- kg"));
    assert!(!html.contains("barra-marcador"));
}

#[test]
fn degenerate_band_keeps_the_row_and_centers_the_marker() {
    let degenerate = r#"{
        "paciente": {},
        "avaliacoes": [ { "peso": 70.0, "dadosCorpo": { "pesoMin": 65.0, "pesoMax": 65.0 } } ]
    }"#;
    let html = render_report(&payload(degenerate), &ReportStyles::default()).unwrap();

    assert!(html.contains("70,0 kg"));
    assert!(html.contains("left: 50.00%"));
}

#[test]
fn inverted_band_drops_the_bar_but_not_the_report() {
    let inverted = r#"{
        "paciente": {},
        "avaliacoes": [ { "peso": 70.0, "dadosCorpo": { "pesoMin": 80.0, "pesoMax": 60.0 } } ]
    }"#;
    let html = render_report(&payload(inverted), &ReportStyles::default()).unwrap();

    assert!(html.contains("70,0 kg"));
    let weight_row = html.split("Peso").nth(1).unwrap();
    let before_bmi = weight_row.split("IMC").next().unwrap();
    assert!(!before_bmi.contains("barra-marcador"));
}

#[test]
fn logo_falls_back_to_clinic_name_text() {
    let html = render_report(&payload(FULL), &ReportStyles::default()).unwrap();
    assert!(html.contains("clinica-texto"));
    assert!(html.contains("Clínica Vida"));
    assert!(!html.contains("data:image/png;base64,"));
}

#[test]
fn logo_bytes_are_embedded_as_a_data_uri() {
    let styles = ReportStyles::default().with_logo(vec![0x89, 0x50, 0x4e, 0x47]);
    let html = render_report(&payload(FULL), &styles).unwrap();
    assert!(html.contains("data:image/png;base64,iVBORw=="));
}

#[test]
fn empty_payload_is_a_report_error() {
    let empty = ReportPayload::from_json("{}").unwrap();
    assert!(render_report(&empty, &ReportStyles::default()).is_err());
}
