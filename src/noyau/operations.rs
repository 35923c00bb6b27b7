// src/noyau/operations.rs
//
// Opérations unitaires pour les collaborateurs (pas d’expression à analyser)
// ------------------------------------------------------------------------
// - une opération binaire {a, b, opérateur}
// - une fonction nommée {valeur, fonction, mode}
// - constantes π / e
// - conversion degrés <-> radians

use super::erreur::ErreurCalcul;
use super::fonctions::{self, ModeAngle};

/// Constantes exposées telles quelles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constantes {
    pub pi: f64,
    pub e: f64,
}

pub fn constantes() -> Constantes {
    Constantes {
        pi: fonctions::pi(),
        e: fonctions::euler(),
    }
}

/// a <op> b. Opérateurs : + - * × / ÷ ^ ** % log
/// ('%' : pourcentage, a * b / 100 ; 'log' : logarithme de a en base b)
pub fn appliquer_operateur(a: f64, b: f64, op: &str) -> Result<f64, ErreurCalcul> {
    match op.trim() {
        "+" => fonctions::addition(a, b),
        "-" | "−" => fonctions::soustraction(a, b),
        "*" | "×" => fonctions::multiplication(a, b),
        "/" | "÷" => fonctions::division(a, b),
        "^" | "**" => fonctions::puissance(a, b),
        "%" => fonctions::pourcentage(a, b),
        "log" => fonctions::log_base(a, b),
        autre => Err(ErreurCalcul::non_supportee(format!(
            "opérateur {autre:?} (opérateurs : + - * / ^ % log)"
        ))),
    }
}

/// fonction(valeur) avec le jeu de noms élargi (cbrt, factorial, hyperboliques…).
pub fn appliquer_fonction(valeur: f64, nom: &str, mode: ModeAngle) -> Result<f64, ErreurCalcul> {
    let nom = nom.trim().to_lowercase();

    let r = match nom.as_str() {
        "sin" => Ok(fonctions::sin(valeur, mode)),
        "cos" => Ok(fonctions::cos(valeur, mode)),
        "tan" => fonctions::tan(valeur, mode),
        "asin" => fonctions::asin(valeur, mode),
        "acos" => fonctions::acos(valeur, mode),
        "atan" => Ok(fonctions::atan(valeur, mode)),
        "log" => fonctions::log10(valeur),
        "ln" => fonctions::ln(valeur),
        "exp" => fonctions::exp(valeur),
        "exp2" => fonctions::exp2(valeur),
        "exp10" => fonctions::exp10(valeur),
        "sqrt" => fonctions::racine_carree(valeur),
        "cbrt" => Ok(fonctions::racine_cubique(valeur)),
        "abs" => Ok(fonctions::valeur_absolue(valeur)),
        "neg" => Ok(fonctions::negation(valeur)),
        "factorial" => fonctions::factorielle(valeur),
        "floor" => Ok(fonctions::plancher(valeur)),
        "ceil" => Ok(fonctions::plafond(valeur)),
        "round" => Ok(fonctions::arrondi(valeur)),
        "sinh" => fonctions::sinh(valeur),
        "cosh" => fonctions::cosh(valeur),
        "tanh" => Ok(fonctions::tanh(valeur)),
        "gamma" => fonctions::gamma(valeur),
        _ => {
            return Err(ErreurCalcul::non_supportee(format!(
                "fonction inconnue : {nom}"
            )))
        }
    };

    r.map_err(|e| e.dans_fonction(&nom))
}

/// Conversion d’angle entre deux modes.
pub fn convertir_angle(valeur: f64, de: ModeAngle, vers: ModeAngle) -> f64 {
    match (de, vers) {
        (ModeAngle::Degres, ModeAngle::Radians) => fonctions::deg_vers_rad(valeur),
        (ModeAngle::Radians, ModeAngle::Degres) => fonctions::rad_vers_deg(valeur),
        _ => valeur,
    }
}
