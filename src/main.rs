use std::io;
use std::process::ExitCode;

use toolkit::cli::{ArgParser, OptionDecl};
use toolkit::sync::SyncWriter;
use toolkit::sync_println;

const MAX_THREADS: usize = 64;

/// Sums the numbers, or returns `None` if the total doesn't fit in an `i64`.
fn checked_sum(numbers: &[i64]) -> Option<i64> {
    numbers.iter().try_fold(0_i64, |total, &number| total.checked_add(number))
}

fn thread_count(requested: i64) -> Option<usize> {
    usize::try_from(requested)
        .ok()
        .filter(|count| (1..=MAX_THREADS).contains(count))
}

fn exit_code(written: io::Result<()>) -> ExitCode {
    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: unable to write output: {error}");
            ExitCode::FAILURE
        },
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let out = SyncWriter::stdout();
    let mut parser = ArgParser::from_env(
        "Sums a few numbers, optionally from several threads.",
        env!("CARGO_PKG_VERSION"),
    );

    let help = parser.flag(["-h", "--help"], "Print this help text");
    let version = parser.flag(["-V", "--version"], "Print the version");
    let numbers = parser.option(
        OptionDecl::new(["-n", "--numbers"])
            .slot("a", 0)
            .slot("b", 0)
            .slot("c", 0)
            .describe("Three integers to sum")
            .required(!help && !version),
    );
    let scale = parser.option(
        OptionDecl::new(["-s", "--scale"])
            .slot("factor", 1.0)
            .describe("Multiply the sum by this factor"),
    );
    let threads = parser.option(
        OptionDecl::new(["-t", "--threads"])
            .slot("count", 1)
            .describe("Print the result from this many threads, at most 64"),
    );

    if help {
        return exit_code(sync_println!(out, "{}", parser.help().trim_end()));
    }
    if version {
        return exit_code(sync_println!(out, "{}", parser.version()));
    }
    if parser.has_errors() {
        for error in parser.errors() {
            eprintln!("error: {error}");
        }
        eprintln!("{}", parser.usage());
        return ExitCode::from(2);
    }

    let resolved = numbers.to_vec_of::<i64>().and_then(|numbers| {
        Ok((numbers, scale.get_as::<f64>(0)?, threads.get_as::<i64>(0)?))
    });
    let (numbers, scale, threads) = match resolved {
        Ok(resolved) => resolved,
        Err(error) => {
            eprintln!("error: {error}");
            return ExitCode::FAILURE;
        },
    };

    let Some(sum) = checked_sum(&numbers) else {
        eprintln!("error: the sum of {numbers:?} doesn't fit in a 64-bit integer");
        return ExitCode::FAILURE;
    };
    let Some(threads) = thread_count(threads) else {
        eprintln!("error: thread count must be between 1 and {MAX_THREADS}, got {threads}");
        return ExitCode::FAILURE;
    };
    let total = sum as f64 * scale;

    let written = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|id| {
                let out = &out;
                scope.spawn(move || sync_println!(out, "[thread {id}] total = {total}"))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err(io::Error::other("printing thread panicked")))
            })
            .collect::<io::Result<()>>()
    });

    exit_code(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_sum() {
        assert_eq!(checked_sum(&[21, 42, 73]), Some(136));
        assert_eq!(checked_sum(&[]), Some(0));
        assert_eq!(checked_sum(&[-5, i64::MIN, 5]), None, "Intermediate underflow is an error.");
        assert_eq!(
            checked_sum(&[i64::MAX, 1, 0]),
            None,
            "Overflowing input should be reported, not wrap or panic."
        );
    }

    #[test]
    fn test_thread_count() {
        assert_eq!(thread_count(1), Some(1));
        assert_eq!(thread_count(MAX_THREADS as i64), Some(MAX_THREADS));
        assert_eq!(thread_count(0), None);
        assert_eq!(thread_count(-3), None);
        assert_eq!(thread_count(100_000_000), None, "Huge counts should be rejected.");
    }

    #[test]
    fn test_exit_code() {
        let code = |written| format!("{:?}", exit_code(written));

        assert_eq!(code(Ok(())), format!("{:?}", ExitCode::SUCCESS));
        assert_eq!(
            code(Err(io::Error::other("closed pipe"))),
            format!("{:?}", ExitCode::FAILURE),
            "A failed write should exit non-zero."
        );
    }
}
