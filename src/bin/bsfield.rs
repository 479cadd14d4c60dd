//! bsfield - evaluate, export and draw the field of a wire and loop scenario.
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn, Level};

use bsfield::config::{load_scenario, Scenario};
use bsfield::export::write_field_csv_file;
use bsfield::math::rss3;
use bsfield::physics::analytic::{
    flux_density_finite_wire, flux_density_infinite_wire, flux_density_loop_off_axis,
};
use bsfield::plot::{render_field_png, PlotOptions};
use bsfield::{superpose, FieldSource, Source, VectorField};

#[derive(Parser, Debug)]
#[command(name = "bsfield", author, version)]
#[command(about = "Magnetic field of a straight wire and a circular loop by discretized Biot-Savart")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct ScenarioArgs {
    /// Scenario TOML file (defaults to the built-in wire and loop)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print each source's field at one point, with closed-form references
    Probe {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Probe point as X,Y,Z in meters (overrides the scenario)
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Option<[f64; 3]>,
    },
    /// Evaluate the total field over the scenario grid and write CSV
    Grid {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Output CSV path
        #[arg(long)]
        output: PathBuf,
    },
    /// Render the total field over the scenario grid to PNG (planar heatmap or 3D view)
    Plot {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Output PNG path
        #[arg(long)]
        output: PathBuf,

        /// Image width in pixels
        #[arg(long, default_value_t = 700)]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = 700)]
        height: u32,
    },
}

fn parse_point(s: &str) -> Result<[f64; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected X,Y,Z, got `{s}`"));
    }
    let mut point = [0.0; 3];
    for (dst, part) in point.iter_mut().zip(&parts) {
        *dst = part
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate `{part}`: {e}"))?;
    }
    Ok(point)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn scenario_from(args: &ScenarioArgs) -> anyhow::Result<Scenario> {
    match &args.config {
        Some(path) => load_scenario(path)
            .with_context(|| format!("loading scenario {}", path.display())),
        None => {
            info!("using built-in scenario");
            Ok(Scenario::default())
        }
    }
}

fn total_field(scenario: &Scenario, xyzp: (&[f64], &[f64], &[f64])) -> anyhow::Result<VectorField> {
    let sources: Vec<&Source> = scenario.sources.iter().collect();
    Ok(superpose(&sources, xyzp)?)
}

fn format_vector(b: (f64, f64, f64)) -> String {
    format!(
        "[{:+.6e}, {:+.6e}, {:+.6e}] T  |B| = {:.6e} T",
        b.0,
        b.1,
        b.2,
        rss3(b.0, b.1, b.2)
    )
}

/// Closed-form counterpart of a source's field at `p`, when one exists there.
fn reference_line(source: &Source, p: [f64; 3]) -> Option<String> {
    let rho = p[0].hypot(p[1]);
    match source {
        Source::Wire(w) if rho > 0.0 => Some(format!(
            "finite-wire closed form |B| = {:.6e} T, infinite-wire limit |B| = {:.6e} T",
            flux_density_finite_wire(w.current, w.length, rho, p[2]).abs(),
            flux_density_infinite_wire(w.current, rho).abs(),
        )),
        Source::Wire(_) => None,
        Source::Loop(l) => {
            let (br, bz) = flux_density_loop_off_axis(l.current, l.radius, rho, p[2]);
            (br.is_finite() && bz.is_finite()).then(|| {
                format!(
                    "elliptic closed form Br = {br:+.6e} T, Bz = {bz:+.6e} T, |B| = {:.6e} T",
                    br.hypot(bz)
                )
            })
        }
    }
}

fn probe(scenario: &Scenario, point: [f64; 3]) -> anyhow::Result<()> {
    let (x, y, z) = ([point[0]], [point[1]], [point[2]]);
    let xyzp = (&x[..], &y[..], &z[..]);

    println!(
        "probe point (m): ({}, {}, {})",
        point[0], point[1], point[2]
    );
    for source in &scenario.sources {
        let b = source.flux_density(xyzp)?;
        println!("{}", source.label());
        println!("  B = {}", format_vector((b.x[0], b.y[0], b.z[0])));
        if let Some(line) = reference_line(source, point) {
            println!("  {line}");
        }
    }
    let total = total_field(scenario, xyzp)?;
    println!("total");
    println!("  B = {}", format_vector((total.x[0], total.y[0], total.z[0])));
    Ok(())
}

fn grid(scenario: &Scenario, output: &Path) -> anyhow::Result<()> {
    let points = scenario.grid.build();
    let field = total_field(scenario, points.coords())?;
    if !field.is_finite() {
        warn!("grid touches a source element; some values are not finite");
    }
    write_field_csv_file(output, points.coords(), &field)
        .with_context(|| format!("writing {}", output.display()))?;
    println!("wrote {} points to {}", points.len(), output.display());
    Ok(())
}

fn plot(scenario: &Scenario, output: &Path, options: &PlotOptions) -> anyhow::Result<()> {
    let points = scenario.grid.build();
    let field = total_field(scenario, points.coords())?;
    render_field_png(output, &points, &field, &scenario.sources, options)
        .with_context(|| format!("rendering {}", output.display()))?;
    println!("wrote plot to {}", output.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Probe { scenario, point } => {
            let scenario = scenario_from(&scenario)?;
            let point = point.unwrap_or(scenario.probe);
            probe(&scenario, point)
        }
        Command::Grid { scenario, output } => grid(&scenario_from(&scenario)?, &output),
        Command::Plot {
            scenario,
            output,
            width,
            height,
        } => {
            let options = PlotOptions {
                width,
                height,
                ..Default::default()
            };
            plot(&scenario_from(&scenario)?, &output, &options)
        }
    }
}
