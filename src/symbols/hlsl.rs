//! Built-in HLSL name lists
//!
//! Plain data consumed by [`SymbolTable`](super::SymbolTable). The lists cover
//! core HLSL plus the Unity/Cg dialect (`fixed`, `sampler2D`, Unity helpers).

/// Reserved control-flow words and storage qualifiers
pub const KEYWORDS: &[&str] = &[
    "if",
    "else",
    "for",
    "while",
    "do",
    "switch",
    "case",
    "default",
    "break",
    "continue",
    "return",
    "discard",
    "struct",
    "typedef",
    "const",
    "static",
    "extern",
    "volatile",
    "inline",
    "noinline",
    "uniform",
    "shared",
    "groupshared",
    "linear",
    "centroid",
    "nointerpolation",
    "noperspective",
    "sample",
    "snorm",
    "unorm",
    "precise",
    "row_major",
    "column_major",
    "cbuffer",
    "tbuffer",
    "register",
    "packoffset",
    "technique",
    "pass",
    "compile",
    "vertexshader",
    "pixelshader",
    "geometryshader",
    "hullshader",
    "domainshader",
    "compute",
    "in",
    "out",
    "inout",
];

/// Scalar, vector, matrix and resource types
pub const TYPES: &[&str] = &[
    "void",
    "bool",
    "int",
    "uint",
    "dword",
    "half",
    "float",
    "double",
    "bool2",
    "bool3",
    "bool4",
    "int2",
    "int3",
    "int4",
    "uint2",
    "uint3",
    "uint4",
    "half2",
    "half3",
    "half4",
    "float2",
    "float3",
    "float4",
    "double2",
    "double3",
    "double4",
    "float2x2",
    "float2x3",
    "float2x4",
    "float3x2",
    "float3x3",
    "float3x4",
    "float4x2",
    "float4x3",
    "float4x4",
    "vector",
    "matrix",
    "Texture1D",
    "Texture2D",
    "Texture3D",
    "TextureCube",
    "Texture1DArray",
    "Texture2DArray",
    "TextureCubeArray",
    "Texture2DMS",
    "Texture2DMSArray",
    "RWTexture1D",
    "RWTexture2D",
    "RWTexture3D",
    "RWTexture1DArray",
    "RWTexture2DArray",
    "SamplerState",
    "SamplerComparisonState",
    "Buffer",
    "RWBuffer",
    "StructuredBuffer",
    "RWStructuredBuffer",
    "ByteAddressBuffer",
    "RWByteAddressBuffer",
    "AppendStructuredBuffer",
    "ConsumeStructuredBuffer",
    "InputPatch",
    "OutputPatch",
    "PointStream",
    "LineStream",
    "TriangleStream",
    "fixed",
    "fixed2",
    "fixed3",
    "fixed4",
    "sampler",
    "sampler1D",
    "sampler2D",
    "sampler3D",
    "samplerCUBE",
];

/// Pipeline binding semantics
pub const SEMANTICS: &[&str] = &[
    "SV_Position",
    "SV_ClipDistance",
    "SV_CullDistance",
    "SV_RenderTargetArrayIndex",
    "SV_ViewportArrayIndex",
    "SV_VertexID",
    "SV_InstanceID",
    "SV_PrimitiveID",
    "SV_IsFrontFace",
    "SV_SampleIndex",
    "SV_GSInstanceID",
    "SV_OutputControlPointID",
    "SV_DomainLocation",
    "SV_TessFactor",
    "SV_InsideTessFactor",
    "SV_Depth",
    "SV_DepthGreaterEqual",
    "SV_DepthLessEqual",
    "SV_Target",
    "SV_Target0",
    "SV_Target1",
    "SV_Target2",
    "SV_Target3",
    "SV_Coverage",
    "SV_DispatchThreadID",
    "SV_GroupID",
    "SV_GroupIndex",
    "SV_GroupThreadID",
    "POSITION",
    "POSITION0",
    "POSITION1",
    "NORMAL",
    "NORMAL0",
    "TANGENT",
    "TANGENT0",
    "COLOR",
    "COLOR0",
    "COLOR1",
    "TEXCOORD0",
    "TEXCOORD1",
    "TEXCOORD2",
    "TEXCOORD3",
    "TEXCOORD4",
    "TEXCOORD5",
    "TEXCOORD6",
    "TEXCOORD7",
    "BLENDWEIGHT",
    "BLENDINDICES",
    "VPOS",
    "VFACE",
    "PSIZE",
    "FOG",
    "DEPTH",
];

/// Intrinsic functions
pub const BUILTIN_FUNCTIONS: &[&str] = &[
    // math
    "abs",
    "acos",
    "asin",
    "atan",
    "atan2",
    "ceil",
    "clamp",
    "cos",
    "cosh",
    "cross",
    "degrees",
    "distance",
    "dot",
    "exp",
    "exp2",
    "floor",
    "fmod",
    "frac",
    "frexp",
    "ldexp",
    "length",
    "lerp",
    "log",
    "log2",
    "log10",
    "max",
    "min",
    "modf",
    "mul",
    "normalize",
    "pow",
    "radians",
    "reflect",
    "refract",
    "round",
    "rsqrt",
    "saturate",
    "sign",
    "sin",
    "sincos",
    "sinh",
    "smoothstep",
    "sqrt",
    "step",
    "tan",
    "tanh",
    "trunc",
    // vector / matrix
    "all",
    "any",
    "determinant",
    "transpose",
    // texture sampling
    "tex2D",
    "tex2Dproj",
    "tex2Dlod",
    "tex2Dbias",
    "tex2Dgrad",
    "texCUBE",
    "texCUBEproj",
    "texCUBElod",
    "texCUBEbias",
    "tex3D",
    "tex3Dproj",
    "tex3Dlod",
    "tex3Dbias",
    "Sample",
    "SampleLevel",
    "SampleBias",
    "SampleGrad",
    "SampleCmp",
    "SampleCmpLevelZero",
    "Load",
    "GetDimensions",
    // Unity
    "UnityObjectToClipPos",
    "UnityObjectToWorldDir",
    "UnityObjectToWorldNormal",
    "UnityWorldToObjectDir",
    "UnityWorldSpaceLightDir",
    "UnityWorldSpaceViewDir",
    "ObjSpaceLightDir",
    "ObjSpaceViewDir",
    "WorldSpaceLightDir",
    "WorldSpaceViewDir",
    "UnityObjectToViewPos",
    "TRANSFORM_TEX",
    "UNITY_MATRIX_MVP",
    // misc
    "clip",
    "ddx",
    "ddy",
    "fwidth",
    "isfinite",
    "isinf",
    "isnan",
    "asfloat",
    "asint",
    "asuint",
    "f16tof32",
    "f32tof16",
    "InterlockedAdd",
    "InterlockedAnd",
    "InterlockedCompareExchange",
    "InterlockedExchange",
    "InterlockedMax",
    "InterlockedMin",
    "InterlockedOr",
    "InterlockedXor",
    "GroupMemoryBarrier",
    "GroupMemoryBarrierWithGroupSync",
    "DeviceMemoryBarrier",
    "DeviceMemoryBarrierWithGroupSync",
    "AllMemoryBarrier",
    "AllMemoryBarrierWithGroupSync",
];

/// Literal constants
pub const CONSTANTS: &[&str] = &["true", "false", "NULL"];

/// Aggregate type names used by convention in Unity/URP shaders
pub const CUSTOM_TYPES: &[&str] = &[
    "v2f",
    "appdata",
    "appdata_base",
    "appdata_full",
    "appdata_tan",
    "appdata_img",
    "v2f_img",
    "Varyings",
    "Attributes",
    "VertexInput",
    "VertexOutput",
    "FragmentInput",
    "SurfaceOutput",
    "SurfaceOutputStandard",
    "SurfaceOutputStandardSpecular",
    "Input",
    "VertexData",
    "InterpolatorsVertex",
];

/// Directive words recognized after `#`
pub const PREPROCESSOR_DIRECTIVES: &[&str] = &[
    "define", "undef", "if", "ifdef", "ifndef", "else", "elif", "endif", "error", "pragma",
    "include", "line",
];

/// Shader block delimiters treated like directives
pub const BLOCK_DELIMITERS: &[&str] = &[
    "CGPROGRAM",
    "ENDCG",
    "CGINCLUDE",
    "HLSLPROGRAM",
    "ENDHLSL",
    "HLSLINCLUDE",
];

/// Operators recognized as a whole symbol run
pub const OPERATORS: &[&str] = &[
    "=", ">", "<", "!", "~", "?", ":", "==", "<=", ">=", "!=", "&&", "||", "++", "--", "+", "-",
    "*", "/", "&", "|", "^", "%", "<<", ">>", "+=", "-=", "*=", "/=", "&=", "|=", "^=", "%=",
    "<<=", ">>=",
];
