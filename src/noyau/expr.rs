// src/noyau/expr.rs
//
// AST flottant (f64).
// - Nombre    : littéral (déjà signé si un '-' unaire y était collé)
// - Neg       : moins unaire devant un groupe / une fonction
// - Appel     : fonction nommée résolue (feuille “fonction(argument)”)
// - Factorielle : '!' postfixé
//
// Évaluation ascendante, gauche avant droite : la première erreur rencontrée gagne.

use super::appels::{factorielle_postfixe, Fonction};
use super::erreur::ErreurCalcul;
use super::fonctions::{self, ModeAngle};

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),

    Neg(Box<Expr>),
    Factorielle(Box<Expr>),
    Appel(Fonction, Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évalue l’arbre avec un mode d’angle fixé pour toute l’évaluation.
    pub fn evaluer(&self, mode: ModeAngle) -> Result<f64, ErreurCalcul> {
        use Expr::*;

        match self {
            Nombre(v) => Ok(*v),

            Neg(x) => Ok(fonctions::negation(x.evaluer(mode)?)),
            Factorielle(x) => factorielle_postfixe(x.evaluer(mode)?),
            Appel(f, x) => {
                let arg = x.evaluer(mode).map_err(|e| e.dans_fonction(f.nom()))?;
                f.appliquer(arg, mode)
            }

            Add(a, b) => {
                let (a, b) = Self::operandes(a, b, mode)?;
                fonctions::addition(a, b)
            }
            Sub(a, b) => {
                let (a, b) = Self::operandes(a, b, mode)?;
                fonctions::soustraction(a, b)
            }
            Mul(a, b) => {
                let (a, b) = Self::operandes(a, b, mode)?;
                fonctions::multiplication(a, b)
            }
            Div(a, b) => {
                let (a, b) = Self::operandes(a, b, mode)?;
                fonctions::division(a, b)
            }
            Pow(a, b) => {
                let (a, b) = Self::operandes(a, b, mode)?;
                fonctions::puissance(a, b)
            }
        }
    }

    fn operandes(a: &Expr, b: &Expr, mode: ModeAngle) -> Result<(f64, f64), ErreurCalcul> {
        let a = a.evaluer(mode)?;
        let b = b.evaluer(mode)?;
        Ok((a, b))
    }
}
