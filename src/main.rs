use chainlist::{List, Value};
use clap::Parser;
use log::info;

/// Build a list by head insertion, print it, then remove values one at a time.
///
/// Without any `--add` or `--remove` this runs the stock demonstration:
/// `hello -> 500 -> 90 -> None`, then `500 -> 90 -> None`.
#[derive(Debug, Parser)]
#[command(name = "chainlist", version)]
struct Args {
    /// Value of the first node
    #[arg(long, default_value = "90", conflicts_with = "empty")]
    initial: Value,

    /// Start from a list with no nodes
    #[arg(long)]
    empty: bool,

    /// Values to insert at the beginning, in order
    #[arg(long = "add", value_name = "VALUE")]
    adds: Vec<Value>,

    /// Values to remove after all insertions, in order
    #[arg(long = "remove", value_name = "VALUE")]
    removes: Vec<Value>,
}

impl Args {
    /// The insertions and removals to run, falling back to the demonstration
    /// only when neither was given.
    fn steps(&mut self) -> (Vec<Value>, Vec<Value>) {
        if self.adds.is_empty() && self.removes.is_empty() {
            return (
                vec![Value::from(500), Value::from("hello")],
                vec![Value::from("hello")],
            );
        }
        (std::mem::take(&mut self.adds), std::mem::take(&mut self.removes))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = Args::parse();
    let (adds, removes) = args.steps();

    let mut list = if args.empty {
        List::empty()
    } else {
        List::new(args.initial)
    };
    for value in adds {
        list.add_to_beginning(value);
    }

    info!("before removal");
    println!("{}", list.to_sequence_string());

    for value in &removes {
        list.remove_first_occurrence(value);
        info!("after removing {value}");
        println!("{}", list.to_sequence_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_runs_only_without_steps() {
        let mut args = Args::try_parse_from(["chainlist"]).unwrap();
        let (adds, removes) = args.steps();
        assert_eq!(adds, vec![Value::from(500), Value::from("hello")]);
        assert_eq!(removes, vec![Value::from("hello")]);

        let mut args = Args::try_parse_from(["chainlist", "--add", "1"]).unwrap();
        let (adds, removes) = args.steps();
        assert_eq!(adds, vec![Value::from(1)]);
        assert!(removes.is_empty());

        let mut args = Args::try_parse_from(["chainlist", "--remove", "90"]).unwrap();
        let (adds, removes) = args.steps();
        assert!(adds.is_empty());
        assert_eq!(removes, vec![Value::from(90)]);
    }
}
