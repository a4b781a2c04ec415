use clap::Parser;

/// Pick a course assignment from a student's first and last name
#[derive(Parser, Debug)]
#[command(author, version, about, after_help = "Example: option --name Ivan --surname Ivanov")]
struct Args {
    /// Student's first name
    #[arg(short, long)]
    name: String,

    /// Student's last name
    #[arg(short, long)]
    surname: String,
}

fn main() {
    let args = Args::parse();

    println!("Task variant: {}", picker::option(&args.name, &args.surname));
}
