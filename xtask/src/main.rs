use std::{
    env,
    path::{Path, PathBuf},
};

use argh::FromArgs;

#[derive(FromArgs, PartialEq, Debug)]
/// Top-level command.
struct Args {
    #[argh(subcommand)]
    subcommand: SubCommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
enum SubCommand {
    Coverage(CoverageArgs),
    ContinuousIntegration(CIArgs),
    Fuzz(FuzzArgs),
}

#[derive(FromArgs, PartialEq, Debug)]
/// Collect test coverage data.
#[argh(subcommand, name = "cov")]
struct CoverageArgs {
    #[argh(switch)]
    /// produce an html report instead of the default .lcov file.
    report: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
/// Run the continuous integration validation tests.
#[argh(subcommand, name = "ci")]
struct CIArgs {
    #[argh(switch)]
    /// attempt to automatically fix format and clippy errors.
    fix: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
/// Run one of the fuzz targets for a while. Needs cargo-fuzz and a nightly toolchain.
#[argh(subcommand, name = "fuzz")]
struct FuzzArgs {
    #[argh(positional)]
    /// which target to run, 'lex' or 'validate'.
    target: String,

    #[argh(option, default = "60")]
    /// how many seconds to fuzz for.
    seconds: u32,
}

const FUZZ_TARGETS: [&str; 2] = ["lex", "validate"];

fn main() -> Result<(), DynError> {
    let args: Args = argh::from_env();
    match args.subcommand {
        SubCommand::Coverage(cov_args) => {
            coverage(cov_args.report)?;
        }
        SubCommand::ContinuousIntegration(ci_args) => {
            ci(ci_args.fix)?;
        }
        SubCommand::Fuzz(fuzz_args) => {
            fuzz(&fuzz_args.target, fuzz_args.seconds)?;
        }
    };

    Ok(())
}

type DynError = Box<dyn std::error::Error>;

fn coverage(report: bool) -> Result<(), DynError> {
    let cov_path = project_root().join("target").join("coverage");
    fs_extra::dir::create_all(&cov_path, true)?;

    // Collect the coverage information by invoking `cargo test` with the appropriate environment
    // variables.
    println!("** collecting coverage information.");
    let cargo = cargo();
    duct::cmd!(cargo, "test", "--tests")
        .env("CARGO_INCREMENTAL", "0")
        .env("RUSTFLAGS", "-C instrument-coverage")
        .env("LLVM_PROFILE_FILE", "cargo-test-%p-%m.profraw")
        .run()?;

    // Now invoke grcov to collate the coverage data into either html report or lcov file.
    println!("** collating coverage data.");
    let (output_format, output_path) = if report {
        ("html", cov_path.join("html"))
    } else {
        ("lcov", cov_path.join("tests.lcov"))
    };
    duct::cmd!(
        "grcov",
        ".",
        "--binary-path",
        project_root().join("target").join("debug").join("deps"),
        "-s",
        ".",
        "-t",
        output_format,
        "--branch",
        "--ignore-not-existing",
        "--ignore", // ignore stuff outside root project directory
        "../*",
        "--ignore", // ignore stuff with a fully specified path (likely system libs)
        "/*",
        "--ignore", // ignore everything in this xtask folder
        "xtask/*",
        "--ignore", // and in the fuzz folder, which has its own workspace
        "fuzz/*",
        "--ignore", // ignore integration test code, this always runs in a test build!
        "lang/tests/*",
        "--ignore", // ignore the binaries, they aren't exercised in test
        "lang/src/bin/*",
        "--ignore", // ignore the test code, always runs.
        "*_unittests.rs",
        "--ignore",
        "*_property_tests.rs",
        "-o",
        output_path,
    )
    .run()?;

    // Cleanup any .profraw files in the project.
    println!("** cleaning up *.profraw files.");
    for entry in glob::glob("**/*.profraw")? {
        fs_extra::file::remove(entry?)?;
    }

    if report {
        println!("** done. Generated coverage report in target/coverage/html/index.html.");
    } else {
        println!("** done. Machine-readable coverage report in target/coverage/tests.lcov")
    }
    Ok(())
}

fn ci(fix: bool) -> Result<(), DynError> {
    let cargo = cargo();
    if fix {
        println!("** automatically fixing code formatting with `cargo fmt --all`");
        duct::cmd!(&cargo, "fmt", "--all",).run()?;
    } else {
        println!("** checking code formatting with `cargo fmt --all -- --check`");
        duct::cmd!(&cargo, "fmt", "--all", "--", "--check",).run()?;
    }

    if fix {
        println!("** automatically fixing clippy issues with `cargo clippy --fix`");
        duct::cmd!(&cargo, "clippy", "--workspace", "--fix").run()?;
    } else {
        println!("** linting code with `cargo clippy --workspace -- --deny clippy::all`");
        duct::cmd!(&cargo, "clippy", "--workspace", "--all-targets", "--", "--deny", "clippy::all",)
            .run()?;
    }

    println!("** building and testing code with `RUSTFLAGS=\"-D warnings\" cargo test`");
    duct::cmd!(&cargo, "test", "--workspace").env("RUSTFLAGS", "-D warnings").run()?;

    println!("** all checks passed!");
    Ok(())
}

fn fuzz(target: &str, seconds: u32) -> Result<(), DynError> {
    if !FUZZ_TARGETS.contains(&target) {
        return Err(format!("unknown fuzz target '{}', expected one of {:?}", target, FUZZ_TARGETS)
            .into());
    }

    let fuzz_root = project_root().join("fuzz");
    fs_extra::dir::create_all(fuzz_root.join("corpus").join(target), false)?;

    println!("** fuzzing '{}' for {} seconds.", target, seconds);
    // The toolchain override needs the rustup proxy, not the cargo running this task.
    duct::cmd!(
        "cargo",
        "+nightly",
        "fuzz",
        "run",
        target,
        "--",
        format!("-max_total_time={}", seconds),
    )
    .dir(&fuzz_root)
    .run()?;

    let artifacts = glob::glob(&format!("{}/artifacts/{}/crash-*", fuzz_root.display(), target))?
        .filter_map(Result::ok)
        .count();
    if artifacts > 0 {
        return Err(format!("fuzzing '{}' left {} crash artifacts", target, artifacts).into());
    }

    println!("** done, no crashes found.");
    Ok(())
}

fn project_root() -> PathBuf {
    Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn cargo() -> String {
    env::var("CARGO").unwrap_or_else(|_| "cargo".to_string())
}
