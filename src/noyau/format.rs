// src/noyau/format.rs

use super::expr::Expr;

/* ------------------------ Résultat numérique ------------------------ */

/// Affiche un f64 avec au plus `digits` décimales (zéros finaux retirés).
/// "-0" devient "0" ; au-delà de 1e15 ou en dessous de 1e-9, notation scientifique.
pub fn format_resultat(v: f64, digits: usize) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if !v.is_finite() {
        return format!("{v}");
    }

    let a = v.abs();
    if !(1e-9..1e15).contains(&a) {
        let txt = format!("{:.*e}", digits.min(16), v);
        return match txt.split_once('e') {
            Some((mantisse, exposant)) => format!("{}e{exposant}", sans_zeros_finaux(mantisse)),
            None => txt,
        };
    }

    let s = sans_zeros_finaux(&format!("{:.*}", digits, v));
    if s == "-0" {
        return "0".to_string();
    }
    s
}

fn sans_zeros_finaux(txt: &str) -> String {
    if !txt.contains('.') {
        return txt.to_string();
    }
    txt.trim_end_matches('0').trim_end_matches('.').to_string()
}

/* ------------------------ Arbre (démarche) ------------------------ */

fn format_nombre(v: f64) -> String {
    if v < 0.0 {
        format!("({v})")
    } else {
        format!("{v}")
    }
}

/// Forme entièrement parenthésée de l’arbre (lecture sans ambiguïté).
pub fn format_expr(e: &Expr) -> String {
    use Expr::*;

    match e {
        Nombre(v) => format_nombre(*v),
        Neg(x) => format!("-({})", format_expr(x)),
        Factorielle(x) => format!("{}!", format_atome(x)),
        Appel(f, x) => format!("{}({})", f.nom(), format_expr(x)),
        Add(a, b) => format!("({} + {})", format_expr(a), format_expr(b)),
        Sub(a, b) => format!("({} - {})", format_expr(a), format_expr(b)),
        Mul(a, b) => format!("({} * {})", format_expr(a), format_expr(b)),
        Div(a, b) => format!("({} / {})", format_expr(a), format_expr(b)),
        Pow(a, b) => format!("({} ^ {})", format_expr(a), format_expr(b)),
    }
}

/// Opérande de '!' : déjà atomique, sinon entre parenthèses.
fn format_atome(e: &Expr) -> String {
    let s = format_expr(e);
    match e {
        Expr::Nombre(_) | Expr::Appel(..) | Expr::Factorielle(_) => s,
        _ if s.starts_with('(') => s,
        _ => format!("({s})"),
    }
}
