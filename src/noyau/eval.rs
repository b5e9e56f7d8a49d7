//! Noyau — évaluation (descente récursive, f64)
//!
//! Grammaire (opérateurs binaires associatifs à gauche) :
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := ('+' | '-') factor | '(' expression ')' | nombre
//! nombre     := suite de [0-9.]
//! ```
//!
//! Remarques :
//! - un seul caractère regardé à l’avance (`Curseur::ch`), `None` = fin d’entrée ;
//! - les espaces sont sautés avant opérateurs/parenthèses, jamais dans un nombre ;
//! - la ')' fermante est optionnelle (parenthèse non fermée tolérée) ;
//! - "1.2.3" est scanné en entier puis refusé par le parse f64 ;
//! - division par zéro => ∞ / NaN (sémantique IEEE), pas une erreur.

use tracing::trace;

use super::erreur::ErreurCalcul;

/// Garde-fou : profondeur max de `parse_factor` (signes unaires + parenthèses).
/// Le wasm a une pile courte, on refuse proprement au lieu de déborder.
pub const PROFONDEUR_MAX: usize = 256;

/// API publique : évalue une expression infixe en f64.
pub fn evaluate(texte: &str) -> Result<f64, ErreurCalcul> {
    let chars: Vec<char> = texte.chars().collect();
    let resultat = Curseur::new(&chars).parse();
    trace!(texte = %texte, ?resultat, "evaluate");
    resultat
}

/// État local d’un appel : position + caractère regardé.
/// La position ne recule jamais.
struct Curseur<'a> {
    chars: &'a [char],
    pos: usize,
    ch: Option<char>,
    profondeur: usize,
}

impl<'a> Curseur<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            pos: 0,
            ch: chars.first().copied(),
            profondeur: 0,
        }
    }

    fn next_char(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
        self.ch = self.chars.get(self.pos).copied();
    }

    /// Saute les espaces, puis consomme `attendu` s’il est regardé.
    /// En cas d’échec, rien d’autre que les espaces n’est consommé.
    fn eat(&mut self, attendu: char) -> bool {
        while self.ch == Some(' ') {
            self.next_char();
        }
        if self.ch == Some(attendu) {
            self.next_char();
            return true;
        }
        false
    }

    fn parse(&mut self) -> Result<f64, ErreurCalcul> {
        let x = self.parse_expression()?;
        if self.pos < self.chars.len() {
            return Err(ErreurCalcul::inattendu(self.ch));
        }
        Ok(x)
    }

    fn parse_expression(&mut self) -> Result<f64, ErreurCalcul> {
        let mut x = self.parse_term()?;
        loop {
            if self.eat('+') {
                x += self.parse_term()?;
            } else if self.eat('-') {
                x -= self.parse_term()?;
            } else {
                return Ok(x);
            }
        }
    }

    fn parse_term(&mut self) -> Result<f64, ErreurCalcul> {
        let mut x = self.parse_factor()?;
        loop {
            if self.eat('*') {
                x *= self.parse_factor()?;
            } else if self.eat('/') {
                x /= self.parse_factor()?;
            } else {
                return Ok(x);
            }
        }
    }

    fn parse_factor(&mut self) -> Result<f64, ErreurCalcul> {
        if self.profondeur >= PROFONDEUR_MAX {
            return Err(ErreurCalcul::TropProfond {
                max: PROFONDEUR_MAX,
            });
        }

        self.profondeur += 1;
        let x = self.facteur();
        self.profondeur -= 1;
        x
    }

    fn facteur(&mut self) -> Result<f64, ErreurCalcul> {
        if self.eat('+') {
            return self.parse_factor();
        }
        if self.eat('-') {
            return Ok(-self.parse_factor()?);
        }

        if self.eat('(') {
            let x = self.parse_expression()?;
            // ')' manquante tolérée
            self.eat(')');
            return Ok(x);
        }

        let ch = self.ch;
        match ch {
            Some(c) if est_chiffre_ou_point(c) => self.nombre(),
            autre => Err(ErreurCalcul::inattendu(autre)),
        }
    }

    /// Scanne [0-9.]* sans compter les points, puis parse f64.
    fn nombre(&mut self) -> Result<f64, ErreurCalcul> {
        let debut = self.pos;
        while matches!(self.ch, Some(c) if est_chiffre_ou_point(c)) {
            self.next_char();
        }

        let texte: String = self.chars[debut..self.pos].iter().collect();
        texte
            .parse::<f64>()
            .map_err(|e| ErreurCalcul::format_nombre(&texte, e))
    }
}

fn est_chiffre_ou_point(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}
