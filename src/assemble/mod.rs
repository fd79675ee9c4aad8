#[cfg(test)]
mod tests;

use crate::store::{ModuleStore, SourceModule, Syntax};
use crate::toolchain::{Toolchain, ToolchainError};

/// Serialize resolved modules into a single compilation unit
///
/// Modules are wrapped in named module declarations and concatenated in
/// resolution order. OCaml sources go through the toolchain's
/// print/parse round trip first; Reason sources are used verbatim. An
/// implementation with a staged interface file gets the interface code
/// injected as a signature ascription.
pub async fn assemble_unit<T: Toolchain + ?Sized>(
    modules: &[&SourceModule],
    store: &ModuleStore,
    toolchain: &T,
) -> Result<String, ToolchainError> {
    let mut wrapped = Vec::with_capacity(modules.len());

    for module in modules {
        let used_code = match module.syntax {
            Syntax::Ocaml => toolchain.translate_ocaml(&module.code).await?,
            _ => module.code.clone(),
        };

        let name = &module.module_name;
        let mut reason_code = format!("module {}", name);

        if let Some(interface) = store.interface_for(&module.path) {
            reason_code += &format!(": {{\n{}\n}}", interface.code);
        }

        // The `#1 <Name>` marker keeps compiler rows attributable to a
        // module inside the concatenated unit
        reason_code += &format!(" = {{\n#1 {}\n{}\n}};", name, used_code);

        wrapped.push(reason_code);
    }

    Ok(wrapped.join("\n\n"))
}
