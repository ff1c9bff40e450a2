use super::cones::{CompositeCone, Cone, SupportedConeTag};
use super::info::SolveInfo;
use super::settings::Control;
use std::io::Write;
use std::time::Duration;

macro_rules! expformat {
    ($fmt:expr,$val:expr) => {
        if $val.is_finite() {
            _exp_str_reformat(format!($fmt, $val))
        } else {
            format!($fmt, $val)
        }
    };
}

const DASHES: &str = "------------------------------------------------------------------------------";

impl SolveInfo {
    pub(crate) fn print_configuration(
        &self,
        out: &mut dyn Write,
        settings: &Control,
        name: &str,
        n: usize,
        p: usize,
        cones: &CompositeCone,
    ) -> std::io::Result<()> {
        if !settings.trace {
            return Ok(());
        }

        writeln!(out, "\ncccp v{} : {name}", crate::VERSION)?;
        writeln!(out, "\nproblem:")?;
        writeln!(out, "  variables     = {n}")?;
        writeln!(out, "  equalities    = {p}")?;
        writeln!(out, "  constraints   = {}", cones.numel())?;
        writeln!(out, "  cones (total) = {}", cones.len())?;

        for (tag, count) in cones.type_counts.iter() {
            _print_conedims_by_type(out, cones, *tag, *count)?;
        }
        writeln!(out)?;

        writeln!(out, "settings:")?;
        writeln!(
            out,
            "  max iter = {}, step adj = {:.3}, beta = {:.1}",
            settings.maxiters, settings.stepadj, settings.beta
        )?;
        writeln!(
            out,
            "  feastol = {:.1e}, abstol = {:.1e}, reltol = {:.1e}",
            settings.feastol, settings.abstol, settings.reltol
        )?;
        writeln!(out)?;

        Ok(())
    }

    pub(crate) fn print_status_header(
        &self,
        out: &mut dyn Write,
        settings: &Control,
    ) -> std::io::Result<()> {
        if !settings.trace {
            return Ok(());
        }

        write!(out, "iter    ")?;
        write!(out, "pcost        ")?;
        write!(out, "dcost       ")?;
        write!(out, "gap       ")?;
        write!(out, "pres      ")?;
        write!(out, "dres      ")?;
        write!(out, " μ       ")?;
        write!(out, "step      ")?;
        writeln!(out)?;
        writeln!(out, "{DASHES}")?;
        out.flush()?;
        Ok(())
    }

    pub(crate) fn print_status(&self, out: &mut dyn Write, settings: &Control) -> std::io::Result<()> {
        if !settings.trace {
            return Ok(());
        }

        write!(out, "{:>3}  ", self.iterations)?;
        write!(out, "{}  ", expformat!("{:+8.4e}", self.pcost))?;
        write!(out, "{}  ", expformat!("{:+8.4e}", self.dcost))?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.gap))?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.pres))?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.dres))?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.μ))?;

        if self.iterations > 0 {
            write!(out, "{}  ", expformat!("{:>.2e}", self.step_length))?;
        } else {
            write!(out, " ------   ")?;
        }
        writeln!(out)?;

        Ok(())
    }

    pub(crate) fn print_footer(&self, out: &mut dyn Write, settings: &Control) -> std::io::Result<()> {
        if !settings.trace {
            return Ok(());
        }

        writeln!(out, "{DASHES}")?;
        writeln!(out, "Terminated with status = {}", self.status)?;
        writeln!(
            out,
            "solve time = {:?}",
            Duration::from_secs_f64(self.solve_time)
        )?;
        out.flush()?;

        Ok(())
    }
}

fn _print_conedims_by_type(
    out: &mut dyn Write,
    cones: &CompositeCone,
    conetag: SupportedConeTag,
    count: usize,
) -> std::io::Result<()> {
    let maxlistlen = 5;

    if count == 0 {
        return Ok(());
    }

    let name = format!("{:>11}", conetag.name());

    let nvars: Vec<usize> = cones
        .iter()
        .filter(|cone| cone.as_tag() == conetag)
        .map(|cone| cone.numel())
        .collect();

    write!(out, "    : {name} = {count}, ")?;

    if count == 1 {
        write!(out, " numel = {}", nvars[0])?;
    } else if count <= maxlistlen {
        let list: Vec<String> = nvars.iter().map(|v| v.to_string()).collect();
        write!(out, " numel = ({})", list.join(","))?;
    } else {
        // first (maxlistlen-1) and the final one
        write!(out, " numel = (")?;
        for nvar in nvars.iter().take(maxlistlen - 1) {
            write!(out, "{nvar},")?;
        }
        write!(out, "...,{})", nvars[nvars.len() - 1])?;
    }
    writeln!(out)?;

    Ok(())
}

// convert a string in LowerExp display format into one that
// 1) always has a sign after the exponent, and
// 2) has at least two digits in the exponent.
fn _exp_str_reformat(mut thestr: String) -> String {
    let Some(eidx) = thestr.find('e') else {
        return thestr;
    };
    let has_sign = thestr[eidx + 1..].starts_with('-');

    let has_short_exp = {
        if !has_sign {
            thestr.len() == eidx + 2
        } else {
            thestr.len() == eidx + 3
        }
    };

    let chars = match (has_sign, has_short_exp) {
        (false, true) => "+0",
        (false, false) => "+",
        (true, true) => "0",
        (true, false) => "",
    };

    let shift = if has_sign { 2 } else { 1 };
    thestr.insert_str(eidx + shift, chars);
    thestr
}

#[test]
fn test_exp_str_reformat() {
    assert_eq!(_exp_str_reformat("1.2340e5".to_string()), "1.2340e+05");
    assert_eq!(_exp_str_reformat("-1.20e-3".to_string()), "-1.20e-03");
    assert_eq!(_exp_str_reformat("1.00e-12".to_string()), "1.00e-12");
    assert_eq!(_exp_str_reformat("+1.0000e17".to_string()), "+1.0000e+17");
}
