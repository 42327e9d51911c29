use std::{
    fs::File,
    io::{self, BufWriter, Write},
    process::ExitCode,
    time::Instant,
};

use log::{info, warn};

use city_tour_core::{
    City, CityMap, Edge, Error, GraphSolver, Result, Stage, TourOptions, logging, total_weight,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::HelpRequested) => {
            print!("{}", TourOptions::usage());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let now = Instant::now();
    let options = TourOptions::from_args()?;
    logging::init_logger(&options)?;

    info!("options: {options}");

    let map = match options.input_path() {
        Some(path) => CityMap::from_file(path)?,
        None => CityMap::from_reader(io::stdin().lock())?,
    };
    if map.skipped_edges > 0 {
        warn!(
            "input: dropped {} edges that reference unknown cities",
            map.skipped_edges
        );
    }

    let mut solver = GraphSolver::new(map.city_count(), &map.edges)?;
    let lines = render(&mut solver, &map.cities, &options);

    match options.output_path() {
        Some(path) => write_lines(BufWriter::new(File::create(path)?), &lines)?,
        None => write_lines(io::stdout().lock(), &lines)?,
    }

    info!(
        "output: stage={} phase={} lines={} time={:.2}s",
        options.stage,
        solver.phase(),
        lines.len(),
        now.elapsed().as_secs_f32()
    );

    Ok(())
}

fn render(solver: &mut GraphSolver, cities: &[City], options: &TourOptions) -> Vec<String> {
    match options.stage {
        Stage::Closure => solver
            .complete_edges()
            .iter()
            .map(|edge| edge_line(cities, edge))
            .collect(),
        Stage::Mst => {
            let edges = solver.mst_edges();
            let mut lines: Vec<String> = edges.iter().map(|edge| edge_line(cities, edge)).collect();
            let mut buf = ryu::Buffer::new();
            lines.push(format!("total {}", buf.format(total_weight(edges))));
            lines
        }
        Stage::Tour => {
            let mst_weight = solver.mst_weight();
            let tour = solver.tour().clone();
            let metrics = tour.tour_metrics(solver.distances(), options.outlier_threshold);
            if let Some(ratio) = metrics.mst_ratio(mst_weight) {
                info!(
                    "metrics: tour={:.3} mst={mst_weight:.3} ratio={ratio:.3}",
                    metrics.total
                );
            }
            vec![tour.route(cities)]
        }
    }
}

fn edge_line(cities: &[City], edge: &Edge) -> String {
    let name = |id: usize| {
        cities
            .get(id)
            .map_or_else(|| format!("#{id}"), |city| city.name.clone())
    };
    let mut buf = ryu::Buffer::new();
    format!("{} {} {}", name(edge.u), name(edge.v), buf.format(edge.weight))
}

fn write_lines(mut out: impl Write, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
