// src/noyau/appels.rs
//
// Appels de fonctions nommées + factorielle postfixée
// ---------------------------------------------------
// - table fixe nom -> fonction unaire de la bibliothèque
// - la trig consulte le mode d’angle reçu (jamais un état global)
// - toute erreur est annotée avec le nom de la fonction

use super::erreur::ErreurCalcul;
use super::fonctions::{self, ModeAngle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Ln,
    Exp,
    Sqrt,
    Abs,
    Floor,
    Ceil,
    Round,
}

/// Noms reconnus dans une expression.
const TABLE: [(&str, Fonction); 14] = [
    ("sin", Fonction::Sin),
    ("cos", Fonction::Cos),
    ("tan", Fonction::Tan),
    ("asin", Fonction::Asin),
    ("acos", Fonction::Acos),
    ("atan", Fonction::Atan),
    ("log", Fonction::Log),
    ("ln", Fonction::Ln),
    ("exp", Fonction::Exp),
    ("sqrt", Fonction::Sqrt),
    ("abs", Fonction::Abs),
    ("floor", Fonction::Floor),
    ("ceil", Fonction::Ceil),
    ("round", Fonction::Round),
];

impl Fonction {
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        TABLE.iter().find(|(n, _)| *n == nom).map(|(_, f)| *f)
    }

    pub fn nom(self) -> &'static str {
        TABLE
            .iter()
            .find(|(_, f)| *f == self)
            .map_or("?", |(n, _)| *n)
    }

    /// Applique la fonction à un argument déjà évalué.
    pub fn appliquer(self, x: f64, mode: ModeAngle) -> Result<f64, ErreurCalcul> {
        use Fonction::*;

        let r = match self {
            Sin => Ok(fonctions::sin(x, mode)),
            Cos => Ok(fonctions::cos(x, mode)),
            Tan => fonctions::tan(x, mode),
            Asin => fonctions::asin(x, mode),
            Acos => fonctions::acos(x, mode),
            Atan => Ok(fonctions::atan(x, mode)),
            Log => fonctions::log10(x),
            Ln => fonctions::ln(x),
            Exp => fonctions::exp(x),
            Sqrt => fonctions::racine_carree(x),
            Abs => Ok(fonctions::valeur_absolue(x)),
            Floor => Ok(fonctions::plancher(x)),
            Ceil => Ok(fonctions::plafond(x)),
            Round => Ok(fonctions::arrondi(x)),
        };

        r.map_err(|e| e.dans_fonction(self.nom()))
    }
}

/// n! (opérateur postfixé).
pub fn factorielle_postfixe(n: f64) -> Result<f64, ErreurCalcul> {
    fonctions::factorielle(n).map_err(|e| e.dans_fonction("factorielle"))
}
