//! AST visitor that collects sprite icon identifiers referenced by `<Icon id=... />`.

use std::collections::HashSet;

use swc_ecma_ast::{
    CondExpr, Expr, JSXAttr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElementName, JSXExpr,
    JSXExprContainer, JSXOpeningElement, Lit, Module, Str,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::config::{DEFAULT_COMPONENT_NAME, DEFAULT_ID_ATTRIBUTE};

/// Collects the identifiers an icon component could render.
///
/// Only statically visible values count: a string literal attribute, or a
/// ternary inside an expression container whose branches are string literals.
/// Every other value shape is skipped without error.
///
/// Descent never stops at a match, so an icon nested inside another icon's
/// children is visited as well.
pub struct IconUsageCollector<'a> {
    component_name: &'a str,
    id_attribute: &'a str,

    pub icon_ids: HashSet<String>,
}

impl<'a> IconUsageCollector<'a> {
    pub fn new(component_name: &'a str, id_attribute: &'a str) -> Self {
        Self {
            component_name,
            id_attribute,
            icon_ids: HashSet::new(),
        }
    }

    /// Visit each top-level statement and return the collected identifiers.
    pub fn collect(mut self, module: &Module) -> HashSet<String> {
        for item in &module.body {
            item.visit_with(&mut self);
        }
        self.icon_ids
    }

    fn is_icon_element(&self, node: &JSXOpeningElement) -> bool {
        matches!(
            &node.name,
            JSXElementName::Ident(ident) if ident.sym.as_str() == self.component_name
        )
    }

    /// First matching attribute wins; later duplicates are never inspected.
    /// React applies the last duplicate prop instead, so `<Icon id="a" id="b" />`
    /// records `a` while rendering `b`.
    fn find_id_attribute<'n>(&self, node: &'n JSXOpeningElement) -> Option<&'n JSXAttr> {
        node.attrs.iter().find_map(|attr| match attr {
            JSXAttrOrSpread::JSXAttr(jsx_attr) => match &jsx_attr.name {
                JSXAttrName::Ident(name) if name.sym.as_str() == self.id_attribute => {
                    Some(jsx_attr)
                }
                _ => None,
            },
            _ => None,
        })
    }

    fn collect_attr_value(&mut self, value: &JSXAttrValue) {
        match value {
            JSXAttrValue::Str(s) => self.insert_str(s),
            JSXAttrValue::JSXExprContainer(JSXExprContainer {
                expr: JSXExpr::Expr(expr),
                ..
            }) => {
                if let Expr::Cond(cond) = &**expr {
                    self.collect_cond_branches(cond);
                }
            }
            _ => {}
        }
    }

    fn collect_cond_branches(&mut self, cond: &CondExpr) {
        for branch in [&cond.cons, &cond.alt] {
            if let Expr::Lit(Lit::Str(s)) = &**branch {
                self.insert_str(s);
            }
        }
    }

    fn insert_str(&mut self, s: &Str) {
        if let Some(value) = s.value.as_str() {
            self.icon_ids.insert(value.to_string());
        }
    }
}

impl Default for IconUsageCollector<'_> {
    fn default() -> Self {
        Self::new(DEFAULT_COMPONENT_NAME, DEFAULT_ID_ATTRIBUTE)
    }
}

impl Visit for IconUsageCollector<'_> {
    fn visit_jsx_opening_element(&mut self, node: &JSXOpeningElement) {
        if self.is_icon_element(node)
            && let Some(JSXAttr {
                value: Some(value), ..
            }) = self.find_id_attribute(node)
        {
            self.collect_attr_value(value);
        }

        node.visit_children_with(self);
    }
}

/// Collect icon identifiers from a module using the default `<Icon id=... />` convention.
pub fn collect_icon_ids(module: &Module) -> HashSet<String> {
    IconUsageCollector::default().collect(module)
}
