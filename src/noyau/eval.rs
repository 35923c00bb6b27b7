//! Noyau — évaluation (pipeline réel)
//!
//! normalise -> jetons -> RPN -> Expr -> évaluation f64
//!
//! Le mode d’angle est un paramètre de chaque évaluation (jamais un état partagé) :
//! `Calculatrice` ne fait que le mémoriser pour l’appelant qui préfère
//! `set_mode` puis `evaluer`.

use super::erreur::ErreurCalcul;
use super::fonctions::ModeAngle;
use super::format::format_expr;
use super::jetons::{format_tokens, tokenize};
use super::normalise::normalise;
use super::reglages::Reglages;
use super::rpn::{from_rpn, to_rpn};

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub normalisee: String,
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
    pub note: String,
}

/// API publique : évalue une expression dans le mode d’angle donné.
pub fn evaluer(expression: &str, mode: ModeAngle) -> Result<f64, ErreurCalcul> {
    evaluer_detaille(expression, &Reglages::avec_mode(mode)).map(|(v, _d)| v)
}

/// Évalue une expression et retourne:
/// - la valeur f64
/// - la Démarche (normalisée, jetons, rpn, arbre)
///
/// Échec rapide : la première erreur rencontrée est retournée telle quelle.
pub fn evaluer_detaille(
    expression: &str,
    reglages: &Reglages,
) -> Result<(f64, DemarcheNoyau), ErreurCalcul> {
    // 1) Normalisation
    let normalisee = normalise(expression);
    if normalisee.is_empty() {
        return Err(ErreurCalcul::syntaxe("expression vide"));
    }

    // 2) Jetons (+ garde-fou taille)
    let jetons = tokenize(&normalisee)?;
    if jetons.len() > reglages.max_jetons {
        return Err(ErreurCalcul::Limite(format!(
            "{} jetons (max {})",
            jetons.len(),
            reglages.max_jetons
        )));
    }

    // 3) RPN (+ garde-fou imbrication)
    let rpn = to_rpn(&jetons, reglages.max_imbrication)?;

    // 4) AST (+ garde-fou profondeur : '-' / '!' en chaîne, longues sommes)
    let arbre = from_rpn(&rpn, reglages.max_profondeur)?;

    // 5) Valeur
    let valeur = arbre.evaluer(reglages.mode)?;

    log::debug!(
        "évalué {expression:?} ({}) -> {valeur}",
        reglages.mode
    );

    let d = DemarcheNoyau {
        normalisee,
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
        arbre: format_expr(&arbre),
        note: format!(
            "Pipeline: normalise → jetons → RPN → arbre → valeur (mode {}).",
            reglages.mode
        ),
    };

    Ok((valeur, d))
}

/// Façade avec mode d’angle mémorisé.
///
/// `Copy` : chaque appelant a sa propre instance, le mode ne fuit pas d’un appel à l’autre.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Calculatrice {
    reglages: Reglages,
}

impl Calculatrice {
    pub fn new(reglages: Reglages) -> Self {
        Self { reglages }
    }

    pub fn set_mode(&mut self, mode: ModeAngle) {
        self.reglages.mode = mode;
    }

    pub fn mode(&self) -> ModeAngle {
        self.reglages.mode
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    pub fn evaluer(&self, expression: &str) -> Result<f64, ErreurCalcul> {
        evaluer_detaille(expression, &self.reglages).map(|(v, _d)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::erreur::GenreErreur;
    use pretty_assertions::assert_eq;

    fn ok(s: &str) -> f64 {
        evaluer(s, ModeAngle::Degres).unwrap_or_else(|e| panic!("evaluer({s:?}) erreur: {e}"))
    }

    fn ok_rad(s: &str) -> f64 {
        evaluer(s, ModeAngle::Radians).unwrap_or_else(|e| panic!("evaluer({s:?}) erreur: {e}"))
    }

    fn genre(s: &str) -> GenreErreur {
        match evaluer(s, ModeAngle::Degres) {
            Ok(v) => panic!("échec attendu pour {s:?}, obtenu {v}"),
            Err(e) => e.genre(),
        }
    }

    fn assert_proche(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    // --- Arithmétique ---

    #[test]
    fn arithmetique_de_base() {
        assert_eq!(ok("1+2"), 3.0);
        assert_eq!(ok("7-10"), -3.0);
        assert_eq!(ok("6*7"), 42.0);
        assert_eq!(ok("9/4"), 2.25);
        assert_eq!(genre("5/0"), GenreErreur::DivisionParZero);
    }

    #[test]
    fn precedence_et_parentheses() {
        assert_eq!(ok("2+3*4"), 14.0);
        assert_eq!(ok("(2+3)*4"), 20.0);
        assert_eq!(ok("2*(3+(4-1))^2"), 72.0);
        assert_eq!(ok("100/10/5"), 2.0);
        assert_eq!(ok("10-4-3"), 3.0);
    }

    #[test]
    fn puissance_deux_ecritures() {
        assert_eq!(ok("2^10"), 1024.0);
        assert_eq!(ok("2**10"), 1024.0);
        assert_eq!(ok("2^3^2"), 64.0);
        assert_eq!(ok("2^-1"), 0.5);
        assert_eq!(genre("(-8)^0.5"), GenreErreur::Domaine);
    }

    #[test]
    fn moins_unaire() {
        assert_eq!(ok("-5+3"), -2.0);
        assert_eq!(ok("3*-2"), -6.0);
        assert_eq!(ok("-2^2"), 4.0);
        assert_eq!(ok("2--3"), 5.0);
        assert_eq!(ok("-(2+3)"), -5.0);
        assert_eq!(ok("-(2+3)*2"), -10.0);
        assert_eq!(ok("--(1)"), 1.0);
    }

    #[test]
    fn multiplication_implicite() {
        assert_eq!(ok("2(3+4)"), 14.0);
        assert_eq!(ok("(1+1)(2+3)"), 10.0);
        assert_proche(ok("2pi"), 2.0 * std::f64::consts::PI);
        assert_proche(ok("2π"), 2.0 * std::f64::consts::PI);
        assert_proche(ok("2e"), 2.0 * std::f64::consts::E);
        assert_proche(ok("3!sin(30)"), 3.0);
        assert_eq!(ok("3!2"), 12.0);
        assert_eq!(ok("2√(4)"), 4.0);
        assert_eq!(ok("√4"), 2.0);
        assert_eq!(ok("√√16+1"), 3.0);
    }

    #[test]
    fn glyphes_et_espaces() {
        assert_eq!(ok(" 6 × 7 "), 42.0);
        assert_eq!(ok("9 ÷ 3 − 1"), 2.0);
    }

    // --- Fonctions ---

    #[test]
    fn mode_angle() {
        assert_proche(ok("sin(90)"), 1.0);
        assert_proche(ok_rad("sin(1.5707963267948966)"), 1.0);
        assert_proche(ok("asin(1)"), 90.0);
        assert_proche(ok_rad("acos(-1)"), std::f64::consts::PI);
        assert_eq!(genre("tan(90)"), GenreErreur::Domaine);
    }

    #[test]
    fn exemple_de_reference() {
        // 2*(3+sin(45))^2, en degrés
        let s45 = (45f64).to_radians().sin();
        assert_proche(ok("2*(3+sin(45))^2"), 2.0 * (3.0 + s45).powi(2));
    }

    #[test]
    fn fonctions_imbriquees() {
        assert_eq!(ok("sqrt(abs(-16))"), 4.0);
        assert_eq!(ok("floor(sqrt(17))+ceil(0.2)"), 5.0);
        assert_eq!(ok("round(2.5)"), 3.0);
        assert_proche(ok("ln(exp(2))"), 2.0);
        assert_proche(ok("log(1000)"), 3.0);
        assert_proche(ok("exp(1)"), std::f64::consts::E);
    }

    #[test]
    fn factorielle() {
        assert_eq!(ok("5!"), 120.0);
        assert_eq!(ok("0!"), 1.0);
        assert_eq!(ok("3!+1"), 7.0);
        assert_eq!(ok("sqrt(9)!"), 6.0);
        assert_eq!(genre("-1!"), GenreErreur::Domaine);
        assert_eq!(genre("171!"), GenreErreur::Depassement);
        assert_eq!(genre("2.5!"), GenreErreur::Domaine);
    }

    #[test]
    fn domaines() {
        assert_eq!(genre("sqrt(-4)"), GenreErreur::Domaine);
        assert_eq!(genre("log(0)"), GenreErreur::Domaine);
        assert_eq!(genre("ln(-1)"), GenreErreur::Domaine);
        assert_eq!(genre("asin(2)"), GenreErreur::Domaine);
        assert_eq!(genre("exp(1000)"), GenreErreur::Depassement);
    }

    #[test]
    fn erreur_annotee_avec_la_fonction() {
        let e = evaluer("1+sqrt(-4)", ModeAngle::Degres).unwrap_err();
        assert!(e.to_string().contains("sqrt"), "{e}");
    }

    // --- Entrées mal formées ---

    #[test]
    fn entrees_mal_formees() {
        assert_eq!(genre(""), GenreErreur::Syntaxe);
        assert_eq!(genre("   "), GenreErreur::Syntaxe);
        assert_eq!(genre("(2+3"), GenreErreur::Syntaxe);
        assert_eq!(genre("2+3)"), GenreErreur::Syntaxe);
        assert_eq!(genre("2+"), GenreErreur::Syntaxe);
        assert_eq!(genre("1..2"), GenreErreur::Syntaxe);
        assert_eq!(genre("foo(1)"), GenreErreur::NonSupportee);
        assert_eq!(genre("5%2"), GenreErreur::NonSupportee);
    }

    #[test]
    fn garde_fous() {
        let profond = format!("{}1{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(genre(&profond), GenreErreur::Limite);

        let long = vec!["1"; 3000].join("+");
        assert_eq!(genre(&long), GenreErreur::Limite);
    }

    #[test]
    fn chaines_sans_parentheses_bornees() {
        // 4000 '-' devant un groupe, 4000 '!' : sous la borne de jetons, arbre trop profond
        let negs = format!("{}(1)", "-".repeat(4000));
        assert_eq!(genre(&negs), GenreErreur::Limite);

        let bangs = format!("1{}", "!".repeat(4000));
        assert_eq!(genre(&bangs), GenreErreur::Limite);

        // au plafond de jetons : 32 000 termes, 65 000 '-'
        let mut r = Reglages::default();
        r.set_max_jetons(usize::MAX);

        let somme = vec!["1"; 32_000].join("+");
        let e = evaluer_detaille(&somme, &r).unwrap_err();
        assert_eq!(e.genre(), GenreErreur::Limite);

        let negs = format!("{}1", "-".repeat(65_000));
        let e = evaluer_detaille(&negs, &r).unwrap_err();
        assert_eq!(e.genre(), GenreErreur::Limite);
    }

    #[test]
    fn chaine_courte_toujours_evaluee() {
        assert_eq!(ok(&format!("{}(1)", "-".repeat(10))), 1.0);
        assert_eq!(ok("3!!"), 720.0);
        assert_eq!(ok(&vec!["1"; 400].join("+")), 400.0);
    }

    // --- Façade ---

    #[test]
    fn jamais_d_infini_en_sortie() {
        // 400 chiffres : illisible en f64, refusé dès la lecture
        let grand = format!("1{}", "0".repeat(400));
        for expr in [
            grand.clone(),
            format!("{grand}-{grand}"),
            format!("{grand}*0"),
            format!("sin({grand})"),
        ] {
            let e = evaluer(&expr, ModeAngle::Radians).unwrap_err();
            assert_eq!(e.genre(), GenreErreur::Syntaxe, "{expr:.20}…");
            assert!(e.to_string().starts_with("erreur de syntaxe : nombre invalide"));
        }

        // 1e200 : lisible, mais le produit déborde
        let moyen = format!("1{}", "0".repeat(200));
        assert_eq!(genre(&format!("{moyen}*{moyen}")), GenreErreur::Depassement);
        let max = format!("1{}", "0".repeat(308));
        assert_eq!(genre(&format!("{max}+{max}")), GenreErreur::Depassement);
        assert_eq!(genre(&format!("0-{max}-{max}")), GenreErreur::Depassement);
        assert_eq!(genre(&format!("{max}/0.1")), GenreErreur::Depassement);
    }

    #[test]
    fn calculatrice_garde_son_mode() {
        let mut c = Calculatrice::default();
        assert_eq!(c.mode(), ModeAngle::Degres);
        assert!((c.evaluer("cos(180)").unwrap() + 1.0).abs() < 1e-12);

        c.set_mode(ModeAngle::Radians);
        assert!((c.evaluer("cos(pi)").unwrap() + 1.0).abs() < 1e-12);

        // une copie ne voit pas les changements de l’autre
        let mut autre = c;
        autre.set_mode(ModeAngle::Degres);
        assert_eq!(c.mode(), ModeAngle::Radians);
    }

    #[test]
    fn demarche_remplie() {
        let (v, d) = evaluer_detaille("2(1+1)", &Reglages::default()).unwrap();
        assert_eq!(v, 4.0);
        assert_eq!(d.normalisee, "2*(1+1)");
        assert_eq!(d.jetons, "2 * ( 1 + 1 )");
        assert_eq!(d.rpn, "2 1 1 + *");
        assert_eq!(d.arbre, "(2 * (1 + 1))");
    }
}
