//! Tests de propriétés : évaluateur contre une évaluation de référence.
//!
//! But : marteler `evaluate` sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - chaque expression générée porte sa valeur de référence (mêmes opérations f64,
//!   même ordre) => égalité au bit près, NaN compris

use std::time::{Duration, Instant};

use super::evaluate;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn meme_valeur(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

/* ------------------------ Génération (texte + référence) ------------------------ */

/// Espace optionnel entre jetons (jamais dans un nombre).
fn sp(rng: &mut Rng) -> &'static str {
    match rng.pick(4) {
        0 => "",
        1 | 2 => " ",
        _ => "  ",
    }
}

fn gen_nombre(rng: &mut Rng) -> (String, f64) {
    let texte = match rng.pick(4) {
        0 => format!("{}", rng.pick(10)),
        1 => format!("{}", rng.pick(1000)),
        2 => format!("{}.{}", rng.pick(100), rng.pick(100)),
        // zéro : pour voir passer ∞ et NaN
        _ => "0".to_string(),
    };
    let v = texte.parse::<f64>().unwrap();
    (texte, v)
}

/// Facteur : nombre, signe unaire, ou expression parenthésée.
fn gen_facteur(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(6) {
        0 | 1 => gen_nombre(rng),
        2 => {
            let (s, v) = gen_facteur(rng, depth - 1);
            (format!("-{}{s}", sp(rng)), -v)
        }
        3 => {
            let (s, v) = gen_facteur(rng, depth - 1);
            (format!("+{}{s}", sp(rng)), v)
        }
        _ => gen_binaire(rng, depth - 1),
    }
}

/// "(a op b)" entièrement parenthésé : la précédence ne joue pas.
fn gen_binaire(rng: &mut Rng, depth: usize) -> (String, f64) {
    let (a, va) = gen_facteur(rng, depth);
    let (b, vb) = gen_facteur(rng, depth);

    let (op, v) = match rng.pick(4) {
        0 => ('+', va + vb),
        1 => ('-', va - vb),
        2 => ('*', va * vb),
        _ => ('/', va / vb),
    };

    let s = format!(
        "({}{a}{}{op}{}{b}{})",
        sp(rng),
        sp(rng),
        sp(rng),
        sp(rng)
    );
    (s, v)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn prop_accord_avec_reference() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut vus_non_finis = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let (s, attendu) = gen_binaire(&mut rng, 4);
        let obtenu = evaluate(&s).unwrap_or_else(|e| panic!("expr={s:?} err={e}"));

        assert!(
            meme_valeur(obtenu, attendu),
            "expr={s:?} obtenu={obtenu} attendu={attendu}"
        );
        if !obtenu.is_finite() {
            vus_non_finis += 1;
        }
    }

    // Le fuzz doit aussi balayer ∞/NaN (division par zéro)
    assert!(vus_non_finis > 0, "aucun ∞/NaN vu: fuzz trop “sage”");
}

#[test]
fn prop_precedence_sans_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_secs(1);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        // a op1 b op2 c, précédence calculée à la main
        let a = (rng.pick(50) + 1) as f64;
        let b = (rng.pick(50) + 1) as f64;
        let c = (rng.pick(50) + 1) as f64;
        let op1 = ['+', '-', '*', '/'][rng.pick(4) as usize];
        let op2 = ['+', '-', '*', '/'][rng.pick(4) as usize];

        let applique = |x: f64, op: char, y: f64| match op {
            '+' => x + y,
            '-' => x - y,
            '*' => x * y,
            _ => x / y,
        };
        let fort = |op: char| op == '*' || op == '/';

        let attendu = if fort(op2) && !fort(op1) {
            applique(a, op1, applique(b, op2, c))
        } else {
            applique(applique(a, op1, b), op2, c)
        };

        let s = format!("{a} {op1} {b} {op2} {c}");
        let obtenu = evaluate(&s).unwrap_or_else(|e| panic!("expr={s:?} err={e}"));
        assert!(
            meme_valeur(obtenu, attendu),
            "expr={s:?} obtenu={obtenu} attendu={attendu}"
        );
    }
}

#[test]
fn prop_espaces_et_idempotence() {
    let t0 = Instant::now();
    let max = Duration::from_secs(1);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..200 {
        budget(t0, max);

        let (s, _) = gen_binaire(&mut rng, 3);
        let compact: String = s.chars().filter(|c| *c != ' ').collect();

        let r1 = evaluate(&s).unwrap_or_else(|e| panic!("expr={s:?} err={e}"));
        let r2 = evaluate(&s).unwrap_or_else(|e| panic!("expr={s:?} err={e}"));
        let r3 = evaluate(&compact).unwrap_or_else(|e| panic!("expr={compact:?} err={e}"));

        assert!(meme_valeur(r1, r2), "non idempotent: {s:?}");
        assert!(meme_valeur(r1, r3), "espaces: {s:?} vs {compact:?}");
    }
}

#[test]
fn prop_parentheses_finales_omises() {
    let t0 = Instant::now();
    let max = Duration::from_secs(1);

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..200 {
        budget(t0, max);

        let (s, attendu) = gen_binaire(&mut rng, 3);
        let tronque = s.trim_end_matches([')', ' ']);

        let obtenu = evaluate(tronque).unwrap_or_else(|e| panic!("expr={tronque:?} err={e}"));
        assert!(
            meme_valeur(obtenu, attendu),
            "expr={tronque:?} obtenu={obtenu} attendu={attendu}"
        );
    }
}

#[test]
fn prop_reste_non_consomme_refuse() {
    let mut rng = Rng::new(0xABCD_u64);

    for _ in 0..100 {
        let (s, _) = gen_binaire(&mut rng, 2);
        let avec_reste = if rng.coin() {
            format!("{s} )")
        } else {
            format!("{s} 7")
        };
        assert!(
            evaluate(&avec_reste).is_err(),
            "aurait dû échouer: {avec_reste:?}"
        );
    }
}
