//! Typography tokens

use vellum_paint::{FontSpec, FontWeight};

/// Text role keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypeToken {
    Header,
    SubHeader,
    Body,
    Button,
    Small,
}

impl TypeToken {
    pub const ALL: [TypeToken; 5] = [
        TypeToken::Header,
        TypeToken::SubHeader,
        TypeToken::Body,
        TypeToken::Button,
        TypeToken::Small,
    ];
}

/// One font descriptor per text role
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyTokens {
    pub header: FontSpec,
    pub sub_header: FontSpec,
    pub body: FontSpec,
    pub button: FontSpec,
    pub small: FontSpec,
}

impl TypographyTokens {
    /// The standard type scale set in a single family
    pub fn with_family(family: &str) -> Self {
        Self {
            header: FontSpec::new(family, 24.0, FontWeight::BOLD),
            sub_header: FontSpec::new(family, 18.0, FontWeight::SEMIBOLD),
            body: FontSpec::new(family, 14.0, FontWeight::NORMAL),
            button: FontSpec::new(family, 14.0, FontWeight::MEDIUM),
            small: FontSpec::new(family, 12.0, FontWeight::NORMAL),
        }
    }

    pub fn get(&self, token: TypeToken) -> &FontSpec {
        match token {
            TypeToken::Header => &self.header,
            TypeToken::SubHeader => &self.sub_header,
            TypeToken::Body => &self.body,
            TypeToken::Button => &self.button,
            TypeToken::Small => &self.small,
        }
    }

    fn get_mut(&mut self, token: TypeToken) -> &mut FontSpec {
        match token {
            TypeToken::Header => &mut self.header,
            TypeToken::SubHeader => &mut self.sub_header,
            TypeToken::Body => &mut self.body,
            TypeToken::Button => &mut self.button,
            TypeToken::Small => &mut self.small,
        }
    }

    /// Rewrite every role's font with `f`
    pub fn map_fonts(mut self, mut f: impl FnMut(TypeToken, &FontSpec) -> FontSpec) -> Self {
        for token in TypeToken::ALL {
            let slot = self.get_mut(token);
            *slot = f(token, slot);
        }
        self
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self::with_family("sans-serif")
    }
}
