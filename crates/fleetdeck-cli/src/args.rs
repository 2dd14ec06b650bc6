use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "fleetdeck")]
#[command(about = "Build fleet dashboard", long_about = None)]
pub struct Args {
    /// View to render: overview, security, architecture-management
    #[arg(long, env = "FLEETDECK_VIEW", default_value = "overview")]
    pub view: String,

    /// Emit the render description as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Reject snapshots violating capacity invariants instead of
    /// coercing them into range
    #[arg(long)]
    pub strict: bool,

    /// Keep reading view ids from stdin and re-render on each switch
    #[arg(long, short)]
    pub interactive: bool,
}
