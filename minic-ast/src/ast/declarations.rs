//! Variable and function declarations
//! 
//! Declarations appear at the top of a compilation unit or inside blocks.
//! They carry no children; everything is on the label line.

use crate::printer::{display_via_render, Printer, Render};
use minic_common::{AstResult, DataType};
use serde::{Deserialize, Serialize};

/// A variable declaration (eg. "int a;" or "extern float b;")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarDecl {
    pub is_extern: bool,
    pub data_type: DataType,
    pub name: String,
}

/// A function declaration (eg. "int main(void);" or "extern int square(int);")
///
/// Parameters are positional in declarations, so only the parameter type is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncDecl {
    pub is_extern: bool,
    pub return_type: DataType,
    pub name: String,
    pub param_type: DataType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Declaration {
    Variable(VarDecl),
    Function(FuncDecl),
}

impl VarDecl {
    pub fn new(is_extern: bool, data_type: DataType, name: impl Into<String>) -> Self {
        Self {
            is_extern,
            data_type,
            name: name.into(),
        }
    }
}

impl FuncDecl {
    pub fn new(
        is_extern: bool,
        return_type: DataType,
        name: impl Into<String>,
        param_type: DataType,
    ) -> Self {
        Self {
            is_extern,
            return_type,
            name: name.into(),
            param_type,
        }
    }
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Variable(decl) => &decl.name,
            Declaration::Function(decl) => &decl.name,
        }
    }

    pub fn is_extern(&self) -> bool {
        match self {
            Declaration::Variable(decl) => decl.is_extern,
            Declaration::Function(decl) => decl.is_extern,
        }
    }
}

impl From<VarDecl> for Declaration {
    fn from(decl: VarDecl) -> Self {
        Declaration::Variable(decl)
    }
}

impl From<FuncDecl> for Declaration {
    fn from(decl: FuncDecl) -> Self {
        Declaration::Function(decl)
    }
}

fn extern_marker(is_extern: bool) -> &'static str {
    if is_extern {
        "extern "
    } else {
        ""
    }
}

impl Render for VarDecl {
    fn render(&self, printer: &mut Printer<'_>, level: usize) -> AstResult<()> {
        printer.line(
            level,
            format_args!(
                "VarDecl. {}{} {}",
                extern_marker(self.is_extern),
                self.data_type,
                self.name
            ),
        )
    }
}

// The marker slot is always followed by a separator, so a non-extern
// declaration carries two spaces after the label.
impl Render for FuncDecl {
    fn render(&self, printer: &mut Printer<'_>, level: usize) -> AstResult<()> {
        printer.line(
            level,
            format_args!(
                "FuncDecl. {} {} {}({})",
                extern_marker(self.is_extern).trim_end(),
                self.return_type,
                self.name,
                self.param_type
            ),
        )
    }
}

impl Render for Declaration {
    fn render(&self, printer: &mut Printer<'_>, level: usize) -> AstResult<()> {
        match self {
            Declaration::Variable(decl) => decl.render(printer, level),
            Declaration::Function(decl) => decl.render(printer, level),
        }
    }
}

display_via_render!(Declaration);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::RenderExt;

    #[test]
    fn test_var_decl() {
        let decl = VarDecl::new(false, DataType::Int, "x");
        assert_eq!(decl.render_lines(0).unwrap(), ["VarDecl. INT_T x"]);

        let decl = VarDecl::new(true, DataType::Float, "scale");
        assert_eq!(decl.render_lines(2).unwrap(), ["|   |   VarDecl. extern FLOAT_T scale"]);
    }

    #[test]
    fn test_func_decl() {
        let decl = FuncDecl::new(false, DataType::Int, "main", DataType::Void);
        assert_eq!(decl.render_lines(0).unwrap(), ["FuncDecl.  INT_T main(VOID_T)"]);

        let decl = FuncDecl::new(true, DataType::Int, "square", DataType::Int);
        assert_eq!(decl.render_lines(0).unwrap(), ["FuncDecl. extern INT_T square(INT_T)"]);
    }

    #[test]
    fn test_declaration_accessors() {
        let var: Declaration = VarDecl::new(true, DataType::Bool, "flag").into();
        let func: Declaration = FuncDecl::new(false, DataType::Void, "tick", DataType::Void).into();
        assert_eq!(var.name(), "flag");
        assert!(var.is_extern());
        assert_eq!(func.name(), "tick");
        assert!(!func.is_extern());
        assert_eq!(func.to_string(), "FuncDecl.  VOID_T tick(VOID_T)\n");
    }
}
