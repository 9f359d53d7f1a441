//! The fully formatted view model handed to the template.
//!
//! Every value is resolved and formatted here; the template only places
//! strings. A metric whose reference band is invalid degrades to `-`
//! placeholders and loses its bar — it never aborts the report.

use serde::Serialize;
use somato_core::models::assessment::Assessment;
use somato_core::models::impedance::{FREQUENCIES_KHZ, ImpedanceReading};
use somato_core::models::limb::{LimbComposition, Segment};
use somato_core::models::payload::ReportPayload;
use somato_core::models::reference::ReferenceRange;
use somato_scale::band::{DEFAULT_TICK_COUNT, NormalBand};
use somato_scale::error::ScaleError;
use somato_scale::format::{PLACEHOLDER, format_loose, format_measure};
use somato_scale::{age, trend};

use crate::error::ReportError;
use crate::styles::{Palette, ReportStyles};

/// Fixed clinical band for BMI, used when the payload carries no
/// `normalidades` entry for it.
const BMI_BAND: ReferenceRange = ReferenceRange {
    minimo: Some(18.5),
    maximo: Some(24.9),
};

#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub clinic_name: String,
    pub generated_at: String,
    pub logo_data_uri: Option<String>,
    pub palette: Palette,
    pub patient: PatientView,
    pub summary: Vec<SummaryRow>,
    pub lean_mass: SegmentPanel,
    pub fat_mass: SegmentPanel,
    pub metabolism: MetabolismView,
    pub impedance: Vec<ImpedanceRow>,
    pub weight_history: Option<ChartView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientView {
    pub nome: String,
    pub estatura: String,
    pub data: String,
    pub email: String,
    pub sexo: String,
    pub idade: String,
}

/// One row of the global summary table: formatted value and band bounds,
/// plus the bar widget when the band and value are usable.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
    pub unit: String,
    pub min: String,
    pub max: String,
    pub bar: Option<BarView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarView {
    /// CSS `left` offset in percent, dot-decimal. Unclamped: out-of-band
    /// measurements place the marker past the container edges.
    pub position: String,
    /// Eleven comma-decimal axis labels, band bounds at indices 2 and 4.
    pub ticks: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentPanel {
    pub total: String,
    pub right_arm: String,
    pub trunk: String,
    pub right_leg: String,
    pub left_arm: String,
    pub left_leg: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetabolismView {
    pub basal_rate: String,
    pub metabolic_age: String,
    pub visceral_level: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpedanceRow {
    pub frequency: String,
    pub right_arm: String,
    pub left_arm: String,
    pub trunk: String,
    pub right_leg: String,
    pub left_leg: String,
}

/// Inline-SVG weight history across all assessments.
#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub width: u32,
    pub height: u32,
    pub polyline: String,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub x: String,
    pub y: String,
    /// Marker label baseline, slightly above the marker.
    pub label_y: String,
    pub value: String,
    pub date: String,
}

pub fn build_view(
    payload: &ReportPayload,
    styles: &ReportStyles,
) -> Result<ReportView, ReportError> {
    let assessment = payload.current_assessment()?;
    let corpo = &assessment.dados_corpo;
    let today = jiff::Zoned::now();

    let patient = &payload.paciente;
    let patient_view = PatientView {
        nome: patient.nome.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
        estatura: format_measure(patient.height_m(), 2),
        data: assessment
            .data
            .map(|dt| dt.strftime("%d/%m/%Y").to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        email: patient.email.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
        sexo: patient
            .sex()
            .map(|s| s.label().to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        idade: patient
            .data_nascimento
            .map(|birth| age::age_on(birth, today.date()).to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
    };

    let range_for = |key: &str, min: Option<f64>, max: Option<f64>| -> Option<ReferenceRange> {
        payload.reference_range(key).copied().or({
            if min.is_none() && max.is_none() {
                None
            } else {
                Some(ReferenceRange { minimo: min, maximo: max })
            }
        })
    };

    let summary = vec![
        summary_row(
            "Peso",
            assessment.peso,
            "kg",
            range_for("peso", corpo.peso_min, corpo.peso_max),
        ),
        summary_row(
            "IMC",
            corpo.bmi,
            "",
            Some(payload.reference_range("bmi").copied().unwrap_or(BMI_BAND)),
        ),
        summary_row(
            "% Gordura",
            corpo.fm_percentual,
            "%",
            range_for(
                "fmPercentual",
                corpo.fm_min_percentual,
                corpo.fm_max_percentual,
            ),
        ),
        summary_row(
            "Massa Muscular",
            corpo.ssm,
            "kg",
            range_for("ssm", corpo.ssm_min, corpo.ssm_max),
        ),
        summary_row(
            "Água Total",
            corpo.tbw,
            "L",
            range_for("tbw", corpo.tbw_min, corpo.tbw_max),
        ),
    ];

    let lean_mass = segment_panel(assessment, corpo.ffm, |c| c.ffm);
    let fat_mass = segment_panel(assessment, corpo.fm, |c| c.fm);

    let metabolism = MetabolismView {
        basal_rate: format_measure(assessment.taxa_metabolica_basal, 0),
        metabolic_age: format_loose(&assessment.idade_metabolica, 0),
        visceral_level: format_loose(&corpo.vfl, 0),
    };

    let impedance = FREQUENCIES_KHZ
        .iter()
        .map(|&khz| impedance_row(khz, assessment.impedance_at(khz)))
        .collect();

    Ok(ReportView {
        clinic_name: payload.user.display_name().to_string(),
        generated_at: today.strftime("%d/%m/%Y %H:%M").to_string(),
        logo_data_uri: styles.logo_data_uri(),
        palette: styles.palette.clone(),
        patient: patient_view,
        summary,
        lean_mass,
        fat_mass,
        metabolism,
        impedance,
        weight_history: weight_chart(&payload.avaliacoes),
    })
}

fn summary_row(
    label: &str,
    value: Option<f64>,
    unit: &str,
    range: Option<ReferenceRange>,
) -> SummaryRow {
    let (min, max) = range
        .map(|r| (format_measure(r.minimo, 1), format_measure(r.maximo, 1)))
        .unwrap_or_else(|| (PLACEHOLDER.to_string(), PLACEHOLDER.to_string()));

    let bar = match (value, range.map(|r| NormalBand::from_range(&r))) {
        (Some(v), Some(Ok(band))) => Some(BarView {
            position: format!("{:.2}", band.position_percent(v)),
            ticks: band
                .ticks(DEFAULT_TICK_COUNT)
                .into_iter()
                .map(|t| format_measure(Some(t), 1))
                .collect(),
        }),
        (_, Some(Err(e))) => {
            if !matches!(e, ScaleError::IncompleteRange) {
                tracing::warn!(metric = label, error = %e, "unusable reference band, omitting bar");
            }
            None
        }
        _ => None,
    };

    SummaryRow {
        label: label.to_string(),
        value: format_measure(value, 1),
        unit: unit.to_string(),
        min,
        max,
        bar,
    }
}

fn segment_panel<F>(assessment: &Assessment, total: Option<f64>, field: F) -> SegmentPanel
where
    F: Fn(&LimbComposition) -> Option<f64>,
{
    let limb = |segment: Segment| -> String {
        format_measure(
            assessment
                .limb(segment.index())
                .and_then(|l| field(&l.composicao_corporal)),
            1,
        )
    };

    SegmentPanel {
        total: format_measure(total, 1),
        right_arm: limb(Segment::RightArm),
        trunk: limb(Segment::Trunk),
        right_leg: limb(Segment::RightLeg),
        left_arm: limb(Segment::LeftArm),
        left_leg: limb(Segment::LeftLeg),
    }
}

fn impedance_row(khz: u32, reading: Option<&ImpedanceReading>) -> ImpedanceRow {
    let cell = |value: Option<f64>| format_measure(value, 0);
    ImpedanceRow {
        frequency: format!("{khz}k"),
        right_arm: cell(reading.and_then(|r| r.impedance_right_arm)),
        left_arm: cell(reading.and_then(|r| r.impedance_left_arm)),
        trunk: cell(reading.and_then(|r| r.impedance_trunk)),
        right_leg: cell(reading.and_then(|r| r.impedance_right_leg)),
        left_leg: cell(reading.and_then(|r| r.impedance_left_leg)),
    }
}

/// The weight trend needs at least two points to draw a line.
fn weight_chart(assessments: &[Assessment]) -> Option<ChartView> {
    let series = trend::extract(assessments, |a| a.peso);
    if series.len() < 2 {
        return None;
    }

    let geometry = trend::ChartGeometry::default();
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let coords = trend::chart_points(&values, geometry);

    let polyline = coords
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");

    let points = series
        .iter()
        .zip(&coords)
        .map(|(point, &(x, y))| ChartPoint {
            x: format!("{x:.1}"),
            y: format!("{y:.1}"),
            label_y: format!("{:.1}", y - 8.0),
            value: format_measure(Some(point.value), 1),
            date: point
                .date
                .map(|d| d.strftime("%d/%m/%y").to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        })
        .collect();

    Some(ChartView {
        width: geometry.width as u32,
        height: geometry.height as u32,
        polyline,
        points,
    })
}
