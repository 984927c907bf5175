use std::cmp::Ordering;

use anyhow::{Context, Result, bail};
use gedcal_core::Calendar;
use gedcal_core::config::{OutputFormat, Settings};
use gedcal_date::calendar::{CalendarExt, day_of_week};
use gedcal_date::{Date, DatePoint, YearSpan, parse_date};
use serde::Serialize;
use serde_json::json;

use crate::cli::{Command, JdnArgs, ParseArgs};

pub fn run(command: Command, settings: &Settings) -> Result<()> {
    let out = Output {
        format: settings.output.format,
    };
    match command {
        Command::Parse(args) => parse(&out, &args, settings.output.to_gregorian),
        Command::Convert { date } => convert(&out, &date),
        Command::Compare { a, b } => compare(&out, &a, &b),
        Command::Between { a, b } => between(&out, &a, &b),
        Command::Validate { dates } => validate(&out, &dates),
        Command::Jdn(args) => jdn(&out, &args),
        Command::FromJdn { calendar, jdn } => from_jdn(&out, calendar, jdn),
    }
}

struct Output {
    format: OutputFormat,
}

impl Output {
    fn emit(&self, value: &impl Serialize, text: impl FnOnce() -> String) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Text => println!("{}", text()),
        }
        Ok(())
    }
}

fn read(input: &str) -> Result<Date> {
    parse_date(input).with_context(|| format!("cannot parse {input:?}"))
}

fn describe_point(point: &DatePoint) -> String {
    let mut parts = Vec::with_capacity(4);
    if let Some(day) = point.day() {
        parts.push(day.to_string());
    }
    if let Some(code) = point.month_code() {
        parts.push(code.to_string());
    }
    match (point.year(), point.dual_year()) {
        (Some(year), Some(dual)) => parts.push(format!("{year}/{dual}")),
        (Some(year), None) => parts.push(year.to_string()),
        (None, _) => parts.push("?".to_string()),
    }
    if point.is_bc() {
        parts.push("BC".to_string());
    }
    format!("{} ({})", parts.join(" "), point.calendar())
}

fn describe(date: &Date) -> String {
    let mut lines = vec![format!("{:?}", date.original())];
    lines.push(format!("  modifier: {}", date.modifier()));
    if let Some(point) = date.point() {
        lines.push(format!("  date:     {}", describe_point(point)));
    }
    if let Some(end) = date.value().end_point() {
        lines.push(format!("  end:      {}", describe_point(end)));
    }
    if let Some(phrase) = date.phrase() {
        lines.push(format!("  phrase:   {phrase}"));
    }
    if let Some(source) = date.interpreted_from() {
        lines.push(format!("  from:     {source}"));
    }
    lines.join("\n")
}

fn parse(out: &Output, args: &ParseArgs, to_gregorian: bool) -> Result<()> {
    let mut failed = 0_usize;
    for input in &args.dates {
        let date = match parse_date(input) {
            Ok(date) => date,
            Err(err) => {
                eprintln!("error: {err}");
                failed += 1;
                continue;
            }
        };
        let gregorian = if args.gregorian || to_gregorian {
            Some(date.to_gregorian()?)
        } else {
            None
        };
        out.emit(&json!({ "date": &date, "gregorian": &gregorian }), || {
            let mut text = describe(&date);
            if let Some(point) = gregorian.as_ref().and_then(Date::point) {
                text.push_str(&format!("\n  gregorian: {}", describe_point(point)));
            }
            text
        })?;
    }
    if failed > 0 {
        bail!("{failed} of {} dates failed to parse", args.dates.len());
    }
    Ok(())
}

fn convert(out: &Output, input: &str) -> Result<()> {
    let date = read(input)?;
    let gregorian = date.to_gregorian()?;
    let jdn = date.point().and_then(DatePoint::jdn);
    out.emit(&json!({ "gregorian": &gregorian, "jdn": jdn }), || {
        let point = gregorian
            .point()
            .map_or_else(|| "no calendar date".to_string(), describe_point);
        match jdn {
            Some(jdn) => format!("{point}\n  jdn: {jdn}"),
            None => point,
        }
    })
}

fn compare(out: &Output, a: &str, b: &str) -> Result<()> {
    let ordering = match read(a)?.compare(&read(b)?) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    };
    out.emit(&json!({ "ordering": ordering }), || ordering.to_string())
}

fn between(out: &Output, a: &str, b: &str) -> Result<()> {
    let span: YearSpan = read(a)?.years_between(&read(b)?)?;
    out.emit(&span, || {
        let exactness = if span.exact { "exact" } else { "approximate" };
        format!("{} years ({exactness})", span.years)
    })
}

fn validate(out: &Output, inputs: &[String]) -> Result<()> {
    let mut failed = 0_usize;
    for input in inputs {
        let result = parse_date(input)
            .map_err(anyhow::Error::from)
            .and_then(|date| date.validate().map_err(anyhow::Error::from));
        let error = result.as_ref().err().map(ToString::to_string);
        if error.is_some() {
            failed += 1;
        }
        out.emit(&json!({ "date": input, "valid": error.is_none(), "error": error }), || {
            match &error {
                Some(err) => format!("{input:?}: invalid: {err}"),
                None => format!("{input:?}: ok"),
            }
        })?;
    }
    if failed > 0 {
        bail!("{failed} of {} dates are invalid", inputs.len());
    }
    Ok(())
}

fn jdn(out: &Output, args: &JdnArgs) -> Result<()> {
    let jdn = args.calendar.to_jdn(args.year, args.month, args.day)?;
    out.emit(
        &json!({ "jdn": jdn, "day_of_week": day_of_week(jdn) }),
        || jdn.to_string(),
    )
}

fn from_jdn(out: &Output, calendar: Calendar, jdn: i64) -> Result<()> {
    let (year, month, day) = calendar.from_jdn(jdn);
    out.emit(
        &json!({ "calendar": calendar, "year": year, "month": month, "day": day }),
        || format!("{year} {month} {day} ({calendar})"),
    )
}
