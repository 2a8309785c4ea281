/*
 * Responsibility
 * - HTTP に依存しない純粋なドメイン層 (Session / access rules)
 * - middleware/handlers はここの型と関数だけを使う
 */
pub mod access;
pub mod session;
