//! Tests scientifiques (campagne) : propriétés + robustesse + limites contrôlées.
//!
//! But : vérifier les contrats du pipeline sans faire chauffer la machine.
//! - propriétés arithmétiques (proptest, entrées formatées par Rust lui-même)
//! - invariants du mode d’angle
//! - stress borné (profondeur, longueur) sous budget temps

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::erreur::GenreErreur;
use super::fonctions::ModeAngle;
use super::normalise::normalise;
use super::{evaluer, Calculatrice};

fn eval_ok(expr: &str, mode: ModeAngle) -> f64 {
    evaluer(expr, mode).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_genre(expr: &str, attendu: GenreErreur) {
    match evaluer(expr, ModeAngle::Degres) {
        Ok(v) => panic!("expr={expr:?} : échec attendu, obtenu {v}"),
        Err(e) => assert_eq!(e.genre(), attendu, "expr={expr:?} err={e}"),
    }
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Propriétés arithmétiques ------------------------ */

proptest! {
    #[test]
    fn sci_addition_soustraction_produit(a in -1.0e6..1.0e6_f64, b in -1.0e6..1.0e6_f64) {
        prop_assert_eq!(evaluer(&format!("{a}+{b}"), ModeAngle::Degres), Ok(a + b));
        prop_assert_eq!(evaluer(&format!("{a}-{b}"), ModeAngle::Degres), Ok(a - b));
        prop_assert_eq!(evaluer(&format!("{a}*{b}"), ModeAngle::Degres), Ok(a * b));
    }

    #[test]
    fn sci_division_par_zero(a in -1.0e6..1.0e6_f64) {
        let e = evaluer(&format!("{a}/0"), ModeAngle::Degres).unwrap_err();
        prop_assert_eq!(e.genre(), GenreErreur::DivisionParZero);
    }

    #[test]
    fn sci_normalisation_point_fixe(s in "[0-9 a-zA-Z().+*/^!π×÷−-]{0,32}") {
        let n1 = normalise(&s);
        prop_assert_eq!(normalise(&n1), n1);
    }
}

/* ------------------------ Invariants trig (mode d’angle) ------------------------ */

#[test]
fn sci_meme_angle_deux_modes() {
    for deg in [0.0_f64, 30.0, 45.0, 60.0, 120.0, 225.0, -300.0] {
        let rad = deg.to_radians();
        for f in ["sin", "cos"] {
            let d = eval_ok(&format!("{f}({deg})"), ModeAngle::Degres);
            let r = eval_ok(&format!("{f}({rad})"), ModeAngle::Radians);
            assert!((d - r).abs() < 1e-12, "{f}({deg}) : {d} != {r}");
        }
    }
}

#[test]
fn sci_reciproques_en_degres() {
    for deg in [-60.0_f64, -30.0, 0.0, 30.0, 60.0] {
        let v = eval_ok(&format!("asin(sin({deg}))"), ModeAngle::Degres);
        assert!((v - deg).abs() < 1e-9, "asin(sin({deg})) = {v}");
        let v = eval_ok(&format!("atan(tan({deg}))"), ModeAngle::Degres);
        assert!((v - deg).abs() < 1e-9, "atan(tan({deg})) = {v}");
    }
}

#[test]
fn sci_asymptotes_tan_degres() {
    assert_genre("tan(90)", GenreErreur::Domaine);
    assert_genre("tan(270)", GenreErreur::Domaine);
    assert_genre("tan(-90)", GenreErreur::Domaine);
    assert!(evaluer("tan(89.999)", ModeAngle::Degres).is_ok());
}

#[test]
fn sci_mode_ne_fuit_pas() {
    let mut deg = Calculatrice::default();
    let mut rad = Calculatrice::default();
    deg.set_mode(ModeAngle::Degres);
    rad.set_mode(ModeAngle::Radians);

    let a = deg.evaluer("sin(90)").unwrap();
    let b = rad.evaluer("sin(90)").unwrap();
    assert!((a - 1.0).abs() < 1e-12);
    assert!((b - 90f64.sin()).abs() < 1e-12);
    // relire : rien n’a bougé
    assert_eq!(deg.evaluer("sin(90)").unwrap(), a);
}

/* ------------------------ Erreurs : genre + premier échec ------------------------ */

#[test]
fn sci_premier_echec_gagne() {
    // gauche à droite : la division (gauche) avant la racine (droite)
    assert_genre("1/0+sqrt(-1)", GenreErreur::DivisionParZero);
    assert_genre("sqrt(-1)+1/0", GenreErreur::Domaine);
    // l’argument est évalué avant la fonction
    assert_genre("asin(1/0)", GenreErreur::DivisionParZero);
}

#[test]
fn sci_factorielle_bornes() {
    assert_eq!(eval_ok("170!", ModeAngle::Degres).is_finite(), true);
    assert_genre("171!", GenreErreur::Depassement);
    assert_genre("(0-3)!", GenreErreur::Domaine);
    assert_eq!(eval_ok("(2+1)!", ModeAngle::Degres), 6.0);
    assert_eq!(eval_ok("3!!", ModeAngle::Degres), 720.0);
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_profondeur_fonctions_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // abs(abs(...(-1)...)) : 30 niveaux (< imbrication max)
    let mut expr = "-1".to_string();
    for _ in 0..30 {
        expr = format!("abs({expr})");
        budget(t0, max);
    }

    assert_eq!(eval_ok(&expr, ModeAngle::Degres), 1.0);
}

#[test]
fn sci_stress_taille_somme_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 400 termes : arbre profond à gauche, sous les bornes de jetons et de profondeur
    let mut expr = String::new();
    for k in 0..400 {
        if k > 0 {
            expr.push('+');
        }
        expr.push_str("0.5");
        budget(t0, max);
    }

    assert_eq!(eval_ok(&expr, ModeAngle::Degres), 200.0);
}
