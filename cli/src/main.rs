use std::{any::type_name, fmt::Display};

use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use thiserror::Error;
use unicoll::{
    Collection, Dynamic, Fixed, Hetero, OutOfRange, fixed, fold_left, fold_right,
    fold_right_flipped, hetero,
    display::DisplayItems,
    index::{Arity, IndexSequence, positions},
    ops::{Concat, MakePair, SameTypeEqual},
    repr::{Visit, VisitAll},
    zip,
};

/// unicoll - zip and fold across dynamic, fixed and heterogeneous collections
#[derive(Parser, Debug)]
#[command(name = "unicoll")]
#[command(about = "Run the uniform-collection samples", long_about = None)]
struct Args {
    /// Print the Rust type and representation of every result
    #[arg(long)]
    types: bool,

    /// Which group of samples to run
    #[arg(long, value_enum, default_value_t = Section::All)]
    section: Section,

    /// Finish by zipping a too-short dynamic collection against the
    /// heterogeneous sample (fails)
    #[arg(long)]
    shortfall: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Section {
    /// `MakePair` over every pairing of the samples
    Zip,
    /// `SameTypeEqual` over every pairing of the samples
    Equal,
    /// The three folds with `Concat` over each sample
    Fold,
    /// Forward and reverse index sequences
    Index,
    All,
}

impl Section {
    fn includes(self, other: Section) -> bool {
        self == Section::All || self == other
    }
}

#[derive(Debug, Error)]
enum HarnessError {
    #[error("{label}: the dynamic operand is shorter than the heterogeneous one")]
    Shortfall {
        label: String,
        #[source]
        source: OutOfRange,
    },
}

type Letters = Dynamic<char>;
type Mixed = Hetero![char, f64, char, i32];
type Fibonacci = Fixed<i32, 5>;

#[allow(clippy::approx_constant)]
fn samples() -> (Letters, Mixed, Fibonacci) {
    (
        Dynamic::from(vec!['a', 'b', 'c', 'z']),
        hetero!['!', 3.14, 'c', 3],
        fixed![1, 1, 2, 3, 5],
    )
}

/// Prints labelled results, optionally with their types.
struct Report {
    types: bool,
}

/// Prints the type of each element of a heterogeneous collection.
struct ElementTypes;

impl<E> Visit<E> for ElementTypes {
    fn visit(&mut self, position: usize, _elem: &E) {
        println!("\t  {position}: {}", type_name::<E>());
    }
}

impl Report {
    fn value<T: Display>(&self, label: &str, value: &T) {
        println!("{label}:");
        if self.types {
            println!("\t{}", type_name::<T>());
        }
        println!("\t{value}");
    }

    fn collection<C: Collection + Display>(&self, label: &str, value: &C) {
        self.value(label, value);
        if self.types {
            println!("\t{:?}", C::REPRESENTATION);
        }
    }

    fn hetero<L>(&self, label: &str, value: &Hetero<L>)
    where
        L: DisplayItems + VisitAll<ElementTypes> + unicoll::HList,
    {
        self.collection(label, value);
        if self.types {
            value.for_each(&mut ElementTypes);
        }
    }
}

fn checked<T>(label: &str, result: std::result::Result<T, OutOfRange>) -> Result<T, HarnessError> {
    result.map_err(|source| HarnessError::Shortfall {
        label: label.to_string(),
        source,
    })
}

fn print_samples(c1: &Letters, c2: &Mixed, c3: &Fibonacci) {
    println!("{c1}");
    for x in c1 {
        print!("{x} ");
    }
    println!();

    println!("{c2}");

    for x in c3 {
        print!("{x} ");
    }
    println!();
}

fn run_make_pair(
    report: &Report,
    c1: &Letters,
    c2: &Mixed,
    c3: &Fibonacci,
) -> Result<(), HarnessError> {
    report.collection("make pair 1&1", &zip(MakePair, c1, c1));
    report.hetero("make pair 1&2", &checked("make pair 1&2", zip(MakePair, c1, c2))?);
    report.collection("make pair 1&3", &zip(MakePair, c1, c3));
    report.hetero("make pair 2&1", &checked("make pair 2&1", zip(MakePair, c2, c1))?);
    report.hetero("make pair 2&2", &zip(MakePair, c2, c2));
    report.hetero("make pair 2&3", &zip(MakePair, c2, c3));
    report.collection("make pair 3&1", &zip(MakePair, c3, c1));
    report.hetero("make pair 3&2", &zip(MakePair, c3, c2));
    report.collection("make pair 3&3", &zip(MakePair, c3, c3));
    Ok(())
}

fn run_same_type_equal(
    report: &Report,
    c1: &Letters,
    c2: &Mixed,
    c3: &Fibonacci,
) -> Result<(), HarnessError> {
    report.collection("are same 1&1", &zip(SameTypeEqual, c1, c1));
    report.hetero("are same 1&2", &checked("are same 1&2", zip(SameTypeEqual, c1, c2))?);
    report.collection("are same 1&3", &zip(SameTypeEqual, c1, c3));
    report.hetero("are same 2&1", &checked("are same 2&1", zip(SameTypeEqual, c2, c1))?);
    report.hetero("are same 2&2", &zip(SameTypeEqual, c2, c2));
    report.hetero("are same 2&3", &zip(SameTypeEqual, c2, c3));
    report.collection("are same 3&1", &zip(SameTypeEqual, c3, c1));
    report.hetero("are same 3&2", &zip(SameTypeEqual, c3, c2));
    report.collection("are same 3&3", &zip(SameTypeEqual, c3, c3));

    // Every result above is uniformly `bool`, so the heterogeneous ones lower.
    let lowered = checked(
        "are same 1&2 (uniform)",
        unicoll::zip_uniform(SameTypeEqual, c1, c2),
    )?;
    report.collection("are same 1&2 (uniform)", &lowered);
    Ok(())
}

fn run_fold(report: &Report, c1: &Letters, c2: &Mixed, c3: &Fibonacci) {
    report.value("foldl concat 1", &fold_left(Concat, String::new(), c1));
    report.value("foldr concat 1", &fold_right(Concat, String::new(), c1));
    report.value("foldrflip concat 1", &fold_right_flipped(Concat, String::new(), c1));
    report.value("foldl concat 2", &fold_left(Concat, String::new(), c2));
    report.value("foldr concat 2", &fold_right(Concat, String::new(), c2));
    report.value("foldrflip concat 2", &fold_right_flipped(Concat, String::new(), c2));
    report.value("foldl concat 3", &fold_left(Concat, String::new(), c3));
    report.value("foldr concat 3", &fold_right(Concat, String::new(), c3));
    report.value("foldrflip concat 3", &fold_right_flipped(Concat, String::new(), c3));
}

fn run_index(report: &Report) {
    type Forward = <Arity<5> as IndexSequence>::Forward;
    type Reverse = <Arity<5> as IndexSequence>::Reverse;
    type Empty = <Arity<0> as IndexSequence>::Reverse;

    for (label, sequence, name) in [
        ("forward 5", positions::<Forward>(), type_name::<Forward>()),
        ("reverse 5", positions::<Reverse>(), type_name::<Reverse>()),
        ("reverse 0", positions::<Empty>(), type_name::<Empty>()),
    ] {
        println!("{label}:");
        if report.types {
            println!("\t{name}");
        }
        println!("\t{sequence:?}");
    }
}

fn run_shortfall(report: &Report, c2: &Mixed) -> Result<(), HarnessError> {
    let short = Dynamic::from(vec!['a', 'b']);
    report.collection("shortfall operand", &short);
    let result = checked("make pair short&2", zip(MakePair, &short, c2))?;
    report.hetero("make pair short&2", &result);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!(section = ?args.section, types = args.types, "running samples");

    let report = Report { types: args.types };
    let (c1, c2, c3) = samples();
    print_samples(&c1, &c2, &c3);

    if args.section.includes(Section::Zip) {
        run_make_pair(&report, &c1, &c2, &c3).into_diagnostic()?;
    }
    if args.section.includes(Section::Equal) {
        run_same_type_equal(&report, &c1, &c2, &c3).into_diagnostic()?;
    }
    if args.section.includes(Section::Fold) {
        run_fold(&report, &c1, &c2, &c3);
    }
    if args.section.includes(Section::Index) {
        run_index(&report);
    }
    if args.shortfall {
        run_shortfall(&report, &c2).into_diagnostic()?;
    }

    Ok(())
}
