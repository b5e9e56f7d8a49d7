//! src/app/etat.rs
//!
//! État UI (sans vue) : écran de la calculatrice + drapeaux de saisie.
//!
//! Rôle : décider ce que chaque touche fait à l’écran, puis déléguer le calcul au noyau
//! (`evaluate`, `percent`) et le rendu à `format_resultat`.
//!
//! Contrats :
//! - Pas de parsing ici : seulement la substitution des glyphes × ÷ avant le noyau.
//! - Toute erreur du noyau devient "Error" à l’écran + état erreur (raison seulement loguée).
//! - En état erreur, opérateurs / point / = / % sont bloqués jusqu’à C ou un chiffre.

use tracing::{debug, warn};

use crate::noyau::{evaluate, format_resultat, percent};

/// Texte affiché quand le noyau échoue.
pub const TEXTE_ERREUR: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Glyphe affiché à l’écran (× et ÷ localisés).
    pub fn glyphe(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }
}

/// Une touche du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    DoubleZero,
    Point,
    Op(Operateur),
    Egal,
    Effacer,
    Supprimer,
    Pourcent,
}

impl Touche {
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(d) => d.to_string(),
            Touche::DoubleZero => "00".to_string(),
            Touche::Point => ".".to_string(),
            Touche::Op(op) => op.glyphe().to_string(),
            Touche::Egal => "=".to_string(),
            Touche::Effacer => "C".to_string(),
            Touche::Supprimer => "DEL".to_string(),
            Touche::Pourcent => "%".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- écran ---
    pub ecran: String,

    // --- drapeaux de saisie ---
    pub dernier_numerique: bool, // le dernier symbole saisi est un chiffre
    pub etat_erreur: bool,       // "Error" affiché, saisie bloquée
    pub dernier_point: bool,     // le nombre en cours contient déjà un point
}

impl AppCalc {
    /* ------------------------ Actions “touches” ------------------------ */

    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(d) => self.chiffre(&(d % 10).to_string()),
            Touche::DoubleZero => self.chiffre("00"),
            Touche::Point => self.point(),
            Touche::Op(op) => self.operateur(op),
            Touche::Egal => self.egal(),
            Touche::Effacer => self.effacer(),
            Touche::Supprimer => self.supprimer(),
            Touche::Pourcent => self.pourcent(),
        }
    }

    /// Chiffre(s) : remplace "Error" si besoin, sinon ajoute.
    pub fn chiffre(&mut self, texte: &str) {
        if self.etat_erreur {
            self.ecran = texte.to_string();
            self.etat_erreur = false;
        } else {
            self.ecran.push_str(texte);
        }
        self.dernier_numerique = true;
    }

    pub fn operateur(&mut self, op: Operateur) {
        if !self.dernier_numerique || self.etat_erreur {
            return;
        }
        self.ecran.push(' ');
        self.ecran.push(op.glyphe());
        self.ecran.push(' ');
        self.dernier_numerique = false;
        self.dernier_point = false;
    }

    pub fn point(&mut self) {
        if !self.dernier_numerique || self.etat_erreur || self.dernier_point {
            return;
        }
        self.ecran.push('.');
        self.dernier_numerique = false;
        self.dernier_point = true;
    }

    /// "=" : évalue l’écran via le noyau.
    pub fn egal(&mut self) {
        if !self.dernier_numerique || self.etat_erreur {
            return;
        }

        let expression = vers_ascii(&self.ecran);
        match evaluate(&expression) {
            Ok(v) => {
                debug!(%expression, resultat = v, "egal");
                self.ecran = format_resultat(v);
                // le rendu contient un point (ou Infinity/NaN) : pas de second point
                self.dernier_point = true;
            }
            Err(e) => {
                warn!(%expression, erreur = %e, "évaluation refusée");
                self.set_erreur();
            }
        }
    }

    /// C : remise à zéro totale.
    pub fn effacer(&mut self) {
        self.ecran.clear();
        self.dernier_numerique = false;
        self.etat_erreur = false;
        self.dernier_point = false;
    }

    /// DEL : retire le dernier caractère puis relit les drapeaux sur ce qui reste.
    pub fn supprimer(&mut self) {
        if self.ecran.pop().is_none() {
            return;
        }

        self.dernier_numerique = self
            .ecran
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_digit());

        // nombre en cours = ce qui suit le dernier espace
        let nombre_en_cours = self.ecran.rsplit(' ').next().unwrap_or("");
        self.dernier_point = nombre_en_cours.contains('.');
    }

    /// % : l’écran doit être UN nombre.
    pub fn pourcent(&mut self) {
        if !self.dernier_numerique || self.etat_erreur {
            return;
        }

        match percent(&self.ecran) {
            Ok(v) => {
                debug!(ecran = %self.ecran, resultat = v, "pourcent");
                self.ecran = format_resultat(v);
            }
            Err(e) => {
                warn!(ecran = %self.ecran, erreur = %e, "pourcent refusé");
                self.set_erreur();
            }
        }
    }

    /// Utilitaire : placer l’erreur (la raison n’est pas affichée).
    fn set_erreur(&mut self) {
        self.ecran = TEXTE_ERREUR.to_string();
        self.etat_erreur = true;
        self.dernier_numerique = false;
    }
}

/// Glyphes localisés -> opérateurs ASCII du noyau.
pub fn vers_ascii(ecran: &str) -> String {
    ecran.replace('÷', "/").replace('×', "*")
}
