use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum, error::ErrorKind};
use tracing::info;

use crate::constants::calendar::FULL_SPAN_LABEL;
use crate::dashboard::{Dashboard, DashboardViews};
use crate::errors::DashboardError;
use crate::filters::{FilterSelection, GroupSelection, YearSelection};
use crate::format::{format_count, format_share};
use crate::groups::BeneficiaryGroup;
use crate::metrics::HEADLINE_GROUPS;
use crate::source::SampleSource;

/// Groups drawn as individual series on the yearly evolution chart.
const YEARLY_SERIES: [BeneficiaryGroup; 5] = [
    BeneficiaryGroup::Indigenas,
    BeneficiaryGroup::Quilombolas,
    BeneficiaryGroup::Extrativistas,
    BeneficiaryGroup::Pescadores,
    BeneficiaryGroup::AtendEmergencial,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "dashboard_report",
    version,
    disable_help_subcommand = true,
    about = "Food-basket distribution report",
    long_about = "Render summary, yearly, distribution, and monthly views of the ADA food-basket sample dataset for one filter selection.",
    after_help = "Set RUST_LOG=debug to trace view recomputation."
)]
struct DashboardReportCli {
    #[arg(
        long,
        default_value = "all",
        value_parser = parse_year_arg,
        help = "Year to report on (`all` or 2019..2025)"
    )]
    year: YearSelection,
    #[arg(
        long,
        default_value = "all",
        value_parser = parse_group_arg,
        help = "Beneficiary group key (`all`, indigenas, quilombolas, ...)"
    )]
    group: GroupSelection,
    #[arg(long, value_enum, default_value_t = FormatArg::Text, help = "Report format")]
    format: FormatArg,
    #[arg(
        long,
        value_name = "PATH",
        help = "Write the report to PATH instead of stdout"
    )]
    output: Option<PathBuf>,
    #[arg(
        long,
        help = "Render an empty report instead of failing when records cannot be loaded"
    )]
    lenient: bool,
}

/// Run the `dashboard_report` CLI with `args_iter` (program name excluded).
pub fn run_dashboard_report<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let Some(cli) = parse_cli::<DashboardReportCli, _>(
        std::iter::once("dashboard_report".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let source = SampleSource::default();
    let mut dashboard = if cli.lenient {
        Dashboard::load_or_empty(&source)
    } else {
        Dashboard::load(&source)?
    };
    let views = dashboard.select(FilterSelection::new(cli.year, cli.group));

    match cli.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(&path)?);
            write_report(views, cli.format, &mut writer)?;
            writer.flush()?;
            info!(path = %path.display(), "wrote dashboard report");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_report(views, cli.format, &mut writer)?;
        }
    }
    Ok(())
}

fn write_report(
    views: &DashboardViews,
    format: FormatArg,
    out: &mut impl Write,
) -> Result<(), DashboardError> {
    match format {
        FormatArg::Text => write_text_report(views, out)?,
        FormatArg::Json => write_json_report(views, out)?,
    }
    Ok(())
}

/// Write `views` as pretty-printed JSON followed by a newline.
pub fn write_json_report(views: &DashboardViews, out: &mut impl Write) -> Result<(), DashboardError> {
    serde_json::to_writer_pretty(&mut *out, views)?;
    writeln!(out)?;
    Ok(())
}

/// Write `views` as a plain-text dashboard.
pub fn write_text_report(views: &DashboardViews, out: &mut impl Write) -> io::Result<()> {
    let filter = views.filter;
    let group_suffix = |sep: &str| {
        filter
            .group
            .as_group()
            .map(|group| format!("{sep}{}", group.label()))
            .unwrap_or_default()
    };

    writeln!(
        out,
        "📦 Distribuição de Cestas Básicas - Programa ADA (2019–2025)"
    )?;
    writeln!(
        out,
        "Análise abrangente da distribuição de assistência alimentar entre grupos beneficiários"
    )?;
    writeln!(out)?;

    writeln!(out, "[FILTROS]")?;
    if filter.year.is_all() && filter.group.is_all() {
        writeln!(out, "  nenhum filtro ativo")?;
    }
    if let Some(year) = filter.year.as_year() {
        writeln!(out, "  Ano: {year}")?;
    }
    if let Some(group) = filter.group.as_group() {
        writeln!(out, "  Grupo: {}", group.label())?;
    }
    writeln!(out)?;

    let summary = &views.summary;
    writeln!(out, "[RESUMO]")?;
    writeln!(
        out,
        "  Total de Cestas: {} ({}{})",
        format_count(summary.total),
        filter.year.as_year().unwrap_or(FULL_SPAN_LABEL),
        group_suffix(" • ")
    )?;
    for group in HEADLINE_GROUPS {
        writeln!(
            out,
            "  {}: {} ({} do total)",
            group.label(),
            format_count(summary.groups.get(group)),
            format_share(views.share(group))
        )?;
    }
    writeln!(
        out,
        "  Outros Grupos: {}",
        format_count(views.other_groups_total())
    )?;
    writeln!(out)?;

    if !views.has_data() {
        writeln!(out, "Nenhum dado disponível para os filtros selecionados")?;
        return Ok(());
    }

    match filter.year.as_year() {
        None => {
            writeln!(out, "[Evolução Anual{}]", group_suffix(" - "))?;
            writeln!(out, "  Tendências de distribuição ao longo dos anos")?;
            let series: Vec<BeneficiaryGroup> = match filter.group.as_group() {
                Some(group) => vec![group],
                None => YEARLY_SERIES.to_vec(),
            };
            for entry in &views.yearly {
                let columns: Vec<String> = series
                    .iter()
                    .map(|group| {
                        format!("{}={}", group.label(), format_count(entry.groups.get(*group)))
                    })
                    .collect();
                writeln!(
                    out,
                    "  {}  {}  Total={}",
                    entry.year,
                    columns.join("  "),
                    format_count(entry.total)
                )?;
            }
        }
        Some(year) => {
            writeln!(out, "[Distribuição Mensal em {year}{}]", group_suffix(" - "))?;
            writeln!(
                out,
                "  Detalhamento mensal da distribuição de cestas básicas para {year}"
            )?;
            for month in &views.monthly {
                writeln!(out, "  {:<4} {:>10}", month.month, format_count(month.total))?;
            }
        }
    }
    writeln!(out)?;

    let (title, caption) = match filter.group.as_group() {
        None => (
            format!(
                "Distribuição por Grupo Beneficiário{}",
                filter
                    .year
                    .as_year()
                    .map(|year| format!(" ({year})"))
                    .unwrap_or_default()
            ),
            "Total de cestas básicas entregues por grupo beneficiário".to_string(),
        ),
        Some(group) => (
            format!(
                "{} - Distribuição{}",
                group.label(),
                filter
                    .year
                    .as_year()
                    .map(|year| format!(" em {year}"))
                    .unwrap_or_else(|| " por Ano".to_string())
            ),
            format!(
                "Distribuição para famílias {}{}",
                group.label(),
                if filter.year.is_all() {
                    " ao longo dos anos"
                } else {
                    ""
                }
            ),
        ),
    };
    writeln!(out, "[{title}]")?;
    writeln!(out, "  {caption}")?;
    for entry in &views.distribution {
        writeln!(out, "  {:<14} {:>10}", entry.label, format_count(entry.value))?;
    }
    Ok(())
}

fn parse_year_arg(raw: &str) -> Result<YearSelection, String> {
    raw.parse::<YearSelection>().map_err(|err| err.to_string())
}

fn parse_group_arg(raw: &str) -> Result<GroupSelection, String> {
    raw.parse::<GroupSelection>().map_err(|err| {
        let keys: Vec<&str> = BeneficiaryGroup::ALL
            .iter()
            .map(|group| group.key())
            .collect();
        format!("{err}; expected 'all' or one of: {}", keys.join(", "))
    })
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
