//! Candidate provider for completion suggestions
//!
//! This module provides the trait and the built-in implementation that supply
//! the static HLSL candidate lists, one method per category.

use super::{CandidateCategory, CompletionCandidate};

/// Trait for providing completion candidates
pub trait CandidateProvider: Send + Sync {
    /// Reserved words
    fn keywords(&self) -> Vec<CompletionCandidate>;

    /// Built-in scalar, vector, matrix and resource types
    fn types(&self) -> Vec<CompletionCandidate>;

    /// Intrinsic functions with parameter placeholders
    fn functions(&self) -> Vec<CompletionCandidate>;

    /// Pipeline semantics
    fn semantics(&self) -> Vec<CompletionCandidate>;

    /// Multi-line code templates
    fn snippets(&self) -> Vec<CompletionCandidate>;
}

/// Name, parameter names and one-line summary of an intrinsic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: &'static str,
    pub params: &'static [&'static str],
    pub summary: &'static str,
}

impl FunctionSignature {
    const fn new(name: &'static str, params: &'static [&'static str], summary: &'static str) -> Self {
        Self {
            name,
            params,
            summary,
        }
    }

    /// `name(${1:p1}, ${2:p2})$0`
    pub fn insert_text(&self) -> String {
        let placeholders: Vec<String> = self
            .params
            .iter()
            .enumerate()
            .map(|(i, param)| format!("${{{}:{}}}", i + 1, param))
            .collect();
        format!("{}({})$0", self.name, placeholders.join(", "))
    }

    /// `<summary> name(p1, p2)`
    pub fn documentation(&self) -> String {
        format!("{} {}({})", self.summary, self.name, self.params.join(", "))
    }

    fn to_candidate(self) -> CompletionCandidate {
        CompletionCandidate {
            label: self.name.to_string(),
            category: CandidateCategory::Function,
            insert_text: self.insert_text(),
            documentation: Some(self.documentation()),
        }
    }
}

const KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue", "return",
    "discard", "struct", "typedef", "const", "static", "uniform", "in", "out", "inout",
];

const TYPES: &[&str] = &[
    "void",
    "bool",
    "int",
    "uint",
    "float",
    "half",
    "double",
    "float2",
    "float3",
    "float4",
    "float4x4",
    "sampler2D",
    "samplerCUBE",
    "Texture2D",
    "SamplerState",
];

pub(super) const FUNCTIONS: &[FunctionSignature] = &[
    FunctionSignature::new("abs", &["x"], "Absolute value"),
    FunctionSignature::new("normalize", &["v"], "Normalize a vector"),
    FunctionSignature::new("lerp", &["a", "b", "t"], "Linear interpolation"),
    FunctionSignature::new("clamp", &["x", "min", "max"], "Clamp to a range"),
    FunctionSignature::new("saturate", &["x"], "Clamp to [0, 1]"),
    FunctionSignature::new("dot", &["a", "b"], "Dot product"),
    FunctionSignature::new("cross", &["a", "b"], "Cross product"),
    FunctionSignature::new("mul", &["a", "b"], "Matrix multiplication"),
    FunctionSignature::new("tex2D", &["sampler", "uv"], "Sample a 2D texture"),
    FunctionSignature::new("length", &["v"], "Vector length"),
    FunctionSignature::new("distance", &["a", "b"], "Distance between two points"),
    FunctionSignature::new("pow", &["x", "y"], "Power"),
    FunctionSignature::new("sqrt", &["x"], "Square root"),
    FunctionSignature::new("sin", &["x"], "Sine"),
    FunctionSignature::new("cos", &["x"], "Cosine"),
    FunctionSignature::new("reflect", &["I", "N"], "Reflection vector"),
    FunctionSignature::new("refract", &["I", "N", "eta"], "Refraction vector"),
    FunctionSignature::new(
        "UnityObjectToClipPos",
        &["pos"],
        "Transform from object space to clip space",
    ),
    FunctionSignature::new(
        "TRANSFORM_TEX",
        &["tex", "name"],
        "Apply texture tiling and offset",
    ),
];

const SEMANTICS: &[(&str, &str)] = &[
    ("SV_Position", "Clip-space vertex position"),
    ("SV_Target", "Render target output"),
    ("POSITION", "Vertex position"),
    ("NORMAL", "Vertex normal"),
    ("TEXCOORD0", "Texture coordinate set 0"),
    ("TEXCOORD1", "Texture coordinate set 1"),
    ("COLOR", "Vertex color"),
    ("TANGENT", "Vertex tangent"),
];

const STRUCT_SNIPPET: &str = "struct ${1:StructName} {\n\t$0\n};";

const VERTFRAG_SNIPPET: &str = "v2f vert(appdata v) {\n\
    \tv2f o;\n\
    \to.pos = UnityObjectToClipPos(v.vertex);\n\
    \t$0\n\
    \treturn o;\n\
    }\n\
    \n\
    float4 frag(v2f i) : SV_Target {\n\
    \treturn float4(1, 1, 1, 1);\n\
    }";

/// Built-in HLSL candidate lists
#[derive(Debug, Clone, Copy, Default)]
pub struct HlslCandidateProvider;

impl HlslCandidateProvider {
    pub fn new() -> Self {
        Self
    }
}

impl CandidateProvider for HlslCandidateProvider {
    fn keywords(&self) -> Vec<CompletionCandidate> {
        KEYWORDS
            .iter()
            .map(|name| CompletionCandidate::plain(CandidateCategory::Keyword, name, None))
            .collect()
    }

    fn types(&self) -> Vec<CompletionCandidate> {
        TYPES
            .iter()
            .map(|name| CompletionCandidate::plain(CandidateCategory::Type, name, None))
            .collect()
    }

    fn functions(&self) -> Vec<CompletionCandidate> {
        FUNCTIONS
            .iter()
            .map(|signature| signature.to_candidate())
            .collect()
    }

    fn semantics(&self) -> Vec<CompletionCandidate> {
        SEMANTICS
            .iter()
            .map(|(name, doc)| CompletionCandidate::plain(CandidateCategory::Semantic, name, Some(doc)))
            .collect()
    }

    fn snippets(&self) -> Vec<CompletionCandidate> {
        vec![
            CompletionCandidate {
                label: "struct".to_string(),
                category: CandidateCategory::Snippet,
                insert_text: STRUCT_SNIPPET.to_string(),
                documentation: Some("Create a struct".to_string()),
            },
            CompletionCandidate {
                label: "vertfrag".to_string(),
                category: CandidateCategory::Snippet,
                insert_text: VERTFRAG_SNIPPET.to_string(),
                documentation: Some("Vertex and fragment shader functions".to_string()),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{SymbolSet, SymbolTable};

    #[test]
    fn test_every_category_populated() {
        let provider = HlslCandidateProvider::new();
        assert_eq!(provider.keywords().len(), KEYWORDS.len());
        assert_eq!(provider.types().len(), 15);
        assert_eq!(provider.functions().len(), 19);
        assert_eq!(provider.semantics().len(), 8);
        assert_eq!(provider.snippets().len(), 2);
    }

    #[test]
    fn test_function_insert_text_and_docs() {
        let lerp = FUNCTIONS.iter().find(|f| f.name == "lerp").unwrap();
        assert_eq!(lerp.insert_text(), "lerp(${1:a}, ${2:b}, ${3:t})$0");
        assert_eq!(lerp.documentation(), "Linear interpolation lerp(a, b, t)");
    }

    #[test]
    fn test_placeholders_match_parameters() {
        let provider = HlslCandidateProvider::new();
        for (candidate, signature) in provider.functions().iter().zip(FUNCTIONS) {
            assert_eq!(candidate.label, signature.name);
            assert_eq!(candidate.placeholder_count(), signature.params.len());
            assert!(candidate.insert_text.ends_with(")$0"));
        }
    }

    #[test]
    fn test_candidates_are_known_symbols() {
        let symbols = SymbolTable::global();
        let provider = HlslCandidateProvider::new();
        for keyword in provider.keywords() {
            assert!(symbols.contains(SymbolSet::Keywords, &keyword.label));
        }
        for ty in provider.types() {
            assert!(symbols.contains(SymbolSet::Types, &ty.label));
        }
        for semantic in provider.semantics() {
            assert!(symbols.contains(SymbolSet::Semantics, &semantic.label));
        }
        for function in provider.functions() {
            assert!(symbols.contains(SymbolSet::BuiltinFunctions, &function.label));
        }
    }

    #[test]
    fn test_snippets() {
        let snippets = HlslCandidateProvider::new().snippets();
        assert_eq!(snippets[0].insert_text, "struct ${1:StructName} {\n\t$0\n};");
        assert_eq!(snippets[0].placeholder_count(), 1);

        let vertfrag = &snippets[1];
        assert_eq!(vertfrag.label, "vertfrag");
        assert!(vertfrag.insert_text.starts_with("v2f vert(appdata v) {\n\tv2f o;\n"));
        assert!(vertfrag.insert_text.contains("\t$0\n\treturn o;\n}\n\nfloat4 frag"));
        assert!(vertfrag.insert_text.ends_with("return float4(1, 1, 1, 1);\n}"));
    }
}
