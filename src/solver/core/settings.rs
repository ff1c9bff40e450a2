use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error type returned by settings validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// A field with an out-of-range value
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Solver control parameters.
///
/// Immutable for the duration of a solve.  Build one with
/// [`ControlBuilder`] or take the [`Default`].

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Control {
    ///maximum number of iterations
    #[builder(default = "100")]
    pub maxiters: u32,

    ///absolute duality gap tolerance
    #[builder(default = "1e-7")]
    pub abstol: f64,

    ///feasibility tolerance (primal and dual)
    #[builder(default = "1e-7")]
    pub feastol: f64,

    ///relative duality gap tolerance
    #[builder(default = "1e-6")]
    pub reltol: f64,

    ///fraction of the step to the cone boundary that is taken
    #[builder(default = "0.95")]
    pub stepadj: f64,

    ///exponent of the Mehrotra centering heuristic
    #[builder(default = "3.0")]
    pub beta: f64,

    ///print the iteration trace
    #[builder(default = "true")]
    pub trace: bool,
}

impl Default for Control {
    fn default() -> Control {
        ControlBuilder::default().build().unwrap()
    }
}

impl Control {
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_maxiters(self.maxiters)?;
        validate_tolerance("abstol", self.abstol)?;
        validate_tolerance("feastol", self.feastol)?;
        validate_tolerance("reltol", self.reltol)?;
        validate_stepadj(self.stepadj)?;
        validate_beta(self.beta)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for ControlBuilderError {
    fn from(e: SettingsError) -> Self {
        ControlBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl ControlBuilder {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(maxiters) = self.maxiters {
            validate_maxiters(maxiters)?;
        }
        if let Some(abstol) = self.abstol {
            validate_tolerance("abstol", abstol)?;
        }
        if let Some(feastol) = self.feastol {
            validate_tolerance("feastol", feastol)?;
        }
        if let Some(reltol) = self.reltol {
            validate_tolerance("reltol", reltol)?;
        }
        if let Some(stepadj) = self.stepadj {
            validate_stepadj(stepadj)?;
        }
        if let Some(beta) = self.beta {
            validate_beta(beta)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_maxiters(maxiters: u32) -> Result<(), SettingsError> {
    if maxiters == 0 {
        return Err(SettingsError::BadFieldValue("maxiters"));
    }
    Ok(())
}

fn validate_tolerance(name: &'static str, tol: f64) -> Result<(), SettingsError> {
    if !(tol.is_finite() && tol > 0.0) {
        return Err(SettingsError::BadFieldValue(name));
    }
    Ok(())
}

fn validate_stepadj(stepadj: f64) -> Result<(), SettingsError> {
    if !(stepadj > 0.0 && stepadj <= 1.0) {
        return Err(SettingsError::BadFieldValue("stepadj"));
    }
    Ok(())
}

fn validate_beta(beta: f64) -> Result<(), SettingsError> {
    if !(beta.is_finite() && beta > 0.0) {
        return Err(SettingsError::BadFieldValue("beta"));
    }
    Ok(())
}

#[test]
fn test_control_builder() {
    let ctrl = ControlBuilder::default()
        .maxiters(20)
        .feastol(1e-9)
        .trace(false)
        .build()
        .unwrap();
    assert_eq!(ctrl.maxiters, 20);
    assert_eq!(ctrl.feastol, 1e-9);
    assert_eq!(ctrl.abstol, Control::default().abstol);
    assert!(ctrl.validate().is_ok());

    assert!(ControlBuilder::default().stepadj(1.5).build().is_err());
    assert!(ControlBuilder::default().maxiters(0).build().is_err());
    assert!(ControlBuilder::default().reltol(-1.0).build().is_err());
    assert!(ControlBuilder::default().beta(f64::NAN).build().is_err());

    let ctrl = Control {
        abstol: 0.0,
        ..Control::default()
    };
    assert_eq!(
        ctrl.validate(),
        Err(SettingsError::BadFieldValue("abstol"))
    );
}
