use crate::demo::{
    run_assess, run_demo, run_diet_plan, run_reminders, run_sentiment, run_workout_plan,
    AssessArgs, DemoArgs, DietPlanArgs, RemindersArgs, SentimentArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use sakhi::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Sakhi",
    about = "Run the Sakhi PCOS companion service or try its workflows from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score questionnaire answers with the risk forest
    Assess(AssessArgs),
    /// Analyze the sentiment of a journal entry
    Sentiment(SentimentArgs),
    /// Generate diet or workout plans
    Plan {
        #[command(subcommand)]
        command: PlanCommand,
    },
    /// Show wellness reminders due at a given time
    Reminders(RemindersArgs),
    /// Walk through every workflow with sample data
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum PlanCommand {
    /// Seven-day PCOS-friendly meal plan
    Diet(DietPlanArgs),
    /// Three-day workout programme with nutrition tips
    Workout,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Sentiment(args) => run_sentiment(args),
        Command::Plan {
            command: PlanCommand::Diet(args),
        } => run_diet_plan(args),
        Command::Plan {
            command: PlanCommand::Workout,
        } => run_workout_plan(),
        Command::Reminders(args) => run_reminders(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
