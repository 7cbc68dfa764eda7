mod app;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON graph to show instead of the built-in sample
    #[arg(long)]
    graph: Option<String>,

    /// Node count for the generated sample graph
    #[arg(long, default_value_t = 24)]
    nodes: usize,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "orbit-menu",
        options,
        Box::new(move |cc| Ok(Box::new(app::DemoApp::new(cc, args.graph.clone(), args.nodes)))),
    )
}
