use crate::problems::{self, Problem, UnknownProblem};
use anyhow::{Context, bail};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Something that turns an input text into an output text.
pub trait Runner {
    fn name(&self) -> &str;
    fn run(&mut self, input: &str) -> anyhow::Result<String>;
}

/// Runs a solution from this crate without spawning a process.
pub struct InProcess {
    problem: &'static Problem,
}

impl InProcess {
    pub fn new(problem_name: &str) -> Result<Self, UnknownProblem> {
        Ok(Self {
            problem: problems::find_problem(problem_name)?,
        })
    }
}

impl Runner for InProcess {
    fn name(&self) -> &str {
        self.problem.problem_name
    }
    fn run(&mut self, input: &str) -> anyhow::Result<String> {
        Ok((self.problem.solve)(input))
    }
}

/// Runs a shell command, feeding the input on stdin and capturing stdout.
pub struct External {
    cmd: String,
}

impl External {
    pub fn new(cmd: &str) -> Self {
        Self {
            cmd: cmd.to_string(),
        }
    }
}

impl Runner for External {
    fn name(&self) -> &str {
        &self.cmd
    }
    fn run(&mut self, input: &str) -> anyhow::Result<String> {
        let stime = Instant::now();
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.cmd)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("Failed to execute command: {}", self.cmd))?;
        let mut stdin = child.stdin.take().context("stdin was not piped")?;
        let input = input.to_string();
        // Feed stdin from another thread so a chatty child cannot deadlock us.
        let writer = std::thread::spawn(move || stdin.write_all(input.as_bytes()));
        let output = child
            .wait_with_output()
            .with_context(|| format!("Failed to wait for: {}", self.cmd))?;
        // A child that exits without reading its input closes the pipe early.
        let _ = writer.join();
        eprintln!("!log time {:.3}", stime.elapsed().as_secs_f64());
        if !output.status.success() {
            if output.status.code() == Some(124) {
                eprintln!("!log status TLE");
            } else {
                eprintln!("!log status RE");
            }
            bail!("{} exited with {}", self.cmd, output.status);
        }
        String::from_utf8(output.stdout).context("Output is not valid UTF-8")
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Case {
    pub input: String,
    pub expected: String,
}

/// A JSON file of sample cases for one problem.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseFile {
    pub problem: String,
    pub cases: Vec<Case>,
}

impl CaseFile {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("No such file: {}", path))?;
        serde_json::from_str(&text).with_context(|| format!("invalid case file: {}", path))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    /// `index` is the first differing whitespace-separated token; `None`
    /// means that side ran out of tokens.
    WrongAnswer {
        index: usize,
        expected: Option<String>,
        actual: Option<String>,
    },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        *self == Verdict::Accepted
    }

    pub fn status(&self) -> &'static str {
        match self {
            Verdict::Accepted => "AC",
            Verdict::WrongAnswer { .. } => "WA",
        }
    }
}

/// Token-wise comparison; line breaks and repeated spaces are not significant.
pub fn compare(expected: &str, actual: &str) -> Verdict {
    let expected = expected.split_whitespace().collect_vec();
    let actual = actual.split_whitespace().collect_vec();
    for index in 0..expected.len().max(actual.len()) {
        let e = expected.get(index);
        let a = actual.get(index);
        if e != a {
            return Verdict::WrongAnswer {
                index,
                expected: e.map(|s| s.to_string()),
                actual: a.map(|s| s.to_string()),
            };
        }
    }
    Verdict::Accepted
}

/// Runs every case and logs a verdict per case plus an overall status.
pub fn judge_cases(runner: &mut dyn Runner, cases: &[Case]) -> anyhow::Result<Vec<Verdict>> {
    let mut verdicts = Vec::with_capacity(cases.len());
    for (i, case) in cases.iter().enumerate() {
        let actual = runner
            .run(&case.input)
            .with_context(|| format!("case {} failed to run", i))?;
        let verdict = compare(&case.expected, &actual);
        eprintln!("!log case {} {}", i, verdict.status());
        if let Verdict::WrongAnswer {
            index,
            expected,
            actual,
        } = &verdict
        {
            eprintln!(
                "token {}: expected {}, actual {}",
                index,
                expected.as_deref().unwrap_or("<eof>"),
                actual.as_deref().unwrap_or("<eof>")
            );
        }
        verdicts.push(verdict);
    }
    if verdicts.iter().all(Verdict::is_accepted) {
        eprintln!("!log status AC");
    } else {
        eprintln!("!log status WA");
    }
    Ok(verdicts)
}
