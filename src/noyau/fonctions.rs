// src/noyau/fonctions.rs
//
// Bibliothèque numérique (f64, sans état)
// ---------------------------------------
// - chaque fonction renvoie une valeur, ou une ErreurCalcul typée
// - aucune coercition silencieuse vers NaN / 0
// - trig : le mode d’angle est TOUJOURS un paramètre explicite

use std::f64::consts::{E, PI};
use std::fmt;
use std::str::FromStr;

use num_traits::ToPrimitive;

use super::erreur::ErreurCalcul;

/// Plus grand n tel que n! reste fini en f64.
pub const FACTORIELLE_MAX: f64 = 170.0;

/// Interprétation des angles pour la trigonométrie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    /// Angle reçu (dans ce mode) -> radians.
    pub fn vers_radians(self, v: f64) -> f64 {
        match self {
            ModeAngle::Degres => deg_vers_rad(v),
            ModeAngle::Radians => v,
        }
    }

    /// Angle calculé en radians -> ce mode.
    pub fn depuis_radians(self, v: f64) -> f64 {
        match self {
            ModeAngle::Degres => rad_vers_deg(v),
            ModeAngle::Radians => v,
        }
    }
}

impl fmt::Display for ModeAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeAngle::Degres => write!(f, "degrés"),
            ModeAngle::Radians => write!(f, "radians"),
        }
    }
}

impl FromStr for ModeAngle {
    type Err = ErreurCalcul;

    /// Accepte les libellés des collaborateurs ("degree", "radian", …).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "degree" | "degrees" | "deg" | "degre" | "degres" | "degré" | "degrés" => {
                Ok(ModeAngle::Degres)
            }
            "radian" | "radians" | "rad" => Ok(ModeAngle::Radians),
            autre => Err(ErreurCalcul::non_supportee(format!(
                "mode d’angle inconnu : {autre:?}"
            ))),
        }
    }
}

/* ------------------------ Constantes + conversions ------------------------ */

pub fn pi() -> f64 {
    PI
}

pub fn euler() -> f64 {
    E
}

pub fn deg_vers_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_vers_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/* ------------------------ Arithmétique de base ------------------------ */

// Opérandes finis ; un résultat infini est un dépassement, jamais une valeur.

pub fn addition(a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    fini_ou_depassement(a + b, "addition")
}

pub fn soustraction(a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    fini_ou_depassement(a - b, "soustraction")
}

pub fn multiplication(a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    fini_ou_depassement(a * b, "multiplication")
}

pub fn division(a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    if b == 0.0 {
        return Err(ErreurCalcul::DivisionParZero);
    }
    fini_ou_depassement(a / b, "division")
}

/// a^b. NaN (base négative, exposant fractionnaire) => domaine ; ∞ => dépassement.
pub fn puissance(a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    let r = a.powf(b);
    if r.is_nan() {
        return Err(ErreurCalcul::domaine(format!(
            "puissance invalide : {a}^{b}"
        )));
    }
    if r.is_infinite() {
        return Err(ErreurCalcul::depassement(format!(
            "puissance non représentable : {a}^{b}"
        )));
    }
    Ok(r)
}

pub fn pourcentage(valeur: f64, pct: f64) -> Result<f64, ErreurCalcul> {
    fini_ou_depassement((valeur * pct) / 100.0, "pourcentage")
}

pub fn racine_carree(v: f64) -> Result<f64, ErreurCalcul> {
    if v < 0.0 {
        return Err(ErreurCalcul::domaine(
            "racine carrée d’un nombre négatif",
        ));
    }
    Ok(v.sqrt())
}

/// Définie sur tous les réels : v<0 => -(-v)^(1/3).
pub fn racine_cubique(v: f64) -> f64 {
    if v >= 0.0 {
        v.powf(1.0 / 3.0)
    } else {
        -(-v).powf(1.0 / 3.0)
    }
}

/// n! pour n entier dans [0, 170], produit itératif 1..n.
pub fn factorielle(n: f64) -> Result<f64, ErreurCalcul> {
    if n < 0.0 {
        return Err(ErreurCalcul::domaine(
            "factorielle non définie pour un nombre négatif",
        ));
    }
    if n != n.floor() {
        return Err(ErreurCalcul::domaine(format!(
            "factorielle définie seulement pour les entiers (reçu {n})"
        )));
    }
    if n > FACTORIELLE_MAX {
        return Err(ErreurCalcul::depassement(format!(
            "factorielle trop grande ({n}! > {FACTORIELLE_MAX}!)"
        )));
    }

    let borne = n
        .to_u32()
        .ok_or_else(|| ErreurCalcul::domaine(format!("factorielle : argument illisible {n}")))?;

    let mut r = 1.0_f64;
    for i in 1..=borne {
        r *= f64::from(i);
    }
    Ok(r)
}

pub fn valeur_absolue(v: f64) -> f64 {
    v.abs()
}

pub fn negation(v: f64) -> f64 {
    -v
}

/* ------------------------ Trigonométrie ------------------------ */

pub fn sin(v: f64, mode: ModeAngle) -> f64 {
    mode.vers_radians(v).sin()
}

pub fn cos(v: f64, mode: ModeAngle) -> f64 {
    mode.vers_radians(v).cos()
}

/// tan indéfinie aux asymptotes.
/// En degrés, l’angle est d’abord ramené dans [0, 180) (reste exact) :
/// l’asymptote est alors exactement 90, quelle que soit la grandeur de v.
pub fn tan(v: f64, mode: ModeAngle) -> Result<f64, ErreurCalcul> {
    let rad = match mode {
        ModeAngle::Degres => {
            let reste = v.rem_euclid(180.0);
            if reste == 90.0 {
                return Err(ErreurCalcul::domaine(format!(
                    "tangente indéfinie en {v}°"
                )));
            }
            deg_vers_rad(reste)
        }
        ModeAngle::Radians => v,
    };

    let r = rad.tan();
    if r.is_infinite() {
        return Err(ErreurCalcul::domaine("tangente indéfinie en ce point"));
    }
    Ok(r)
}

pub fn asin(v: f64, mode: ModeAngle) -> Result<f64, ErreurCalcul> {
    if !(-1.0..=1.0).contains(&v) {
        return Err(ErreurCalcul::domaine(
            "arcsin : la valeur doit être comprise entre -1 et 1",
        ));
    }
    Ok(mode.depuis_radians(v.asin()))
}

pub fn acos(v: f64, mode: ModeAngle) -> Result<f64, ErreurCalcul> {
    if !(-1.0..=1.0).contains(&v) {
        return Err(ErreurCalcul::domaine(
            "arccos : la valeur doit être comprise entre -1 et 1",
        ));
    }
    Ok(mode.depuis_radians(v.acos()))
}

pub fn atan(v: f64, mode: ModeAngle) -> f64 {
    mode.depuis_radians(v.atan())
}

/* ------------------------ Logarithmes + exponentielles ------------------------ */

pub fn log10(v: f64) -> Result<f64, ErreurCalcul> {
    if v <= 0.0 {
        return Err(ErreurCalcul::domaine(
            "logarithme : la valeur doit être strictement positive",
        ));
    }
    Ok(v.log10())
}

pub fn ln(v: f64) -> Result<f64, ErreurCalcul> {
    if v <= 0.0 {
        return Err(ErreurCalcul::domaine(
            "logarithme népérien : la valeur doit être strictement positive",
        ));
    }
    Ok(v.ln())
}

pub fn log_base(v: f64, base: f64) -> Result<f64, ErreurCalcul> {
    if v <= 0.0 {
        return Err(ErreurCalcul::domaine(
            "logarithme : la valeur doit être strictement positive",
        ));
    }
    if base <= 0.0 || base == 1.0 {
        return Err(ErreurCalcul::domaine(
            "logarithme : la base doit être positive et différente de 1",
        ));
    }
    Ok(v.ln() / base.ln())
}

fn fini_ou_depassement(r: f64, quoi: &str) -> Result<f64, ErreurCalcul> {
    if r.is_infinite() {
        return Err(ErreurCalcul::depassement(format!("{quoi} : dépassement")));
    }
    Ok(r)
}

pub fn exp(v: f64) -> Result<f64, ErreurCalcul> {
    fini_ou_depassement(v.exp(), "exponentielle")
}

pub fn exp2(v: f64) -> Result<f64, ErreurCalcul> {
    fini_ou_depassement(v.exp2(), "exponentielle base 2")
}

pub fn exp10(v: f64) -> Result<f64, ErreurCalcul> {
    fini_ou_depassement(10.0_f64.powf(v), "exponentielle base 10")
}

/* ------------------------ Hyperboliques ------------------------ */

pub fn sinh(v: f64) -> Result<f64, ErreurCalcul> {
    fini_ou_depassement(v.sinh(), "sinus hyperbolique")
}

pub fn cosh(v: f64) -> Result<f64, ErreurCalcul> {
    fini_ou_depassement(v.cosh(), "cosinus hyperbolique")
}

pub fn tanh(v: f64) -> f64 {
    v.tanh()
}

/* ------------------------ Divers ------------------------ */

/// Γ(v). Pôles (entiers ≤ 0) et NaN => domaine ; ∞ => dépassement.
pub fn gamma(v: f64) -> Result<f64, ErreurCalcul> {
    if v <= 0.0 && v == v.floor() {
        return Err(ErreurCalcul::domaine(format!(
            "gamma non définie en {v} (pôle)"
        )));
    }
    let r = libm::tgamma(v);
    if r.is_nan() {
        return Err(ErreurCalcul::domaine(format!("gamma non définie en {v}")));
    }
    fini_ou_depassement(r, "gamma")
}

pub fn plancher(v: f64) -> f64 {
    v.floor()
}

pub fn plafond(v: f64) -> f64 {
    v.ceil()
}

/// Arrondi à l’entier le plus proche (demi loin de zéro).
pub fn arrondi(v: f64) -> f64 {
    v.round()
}
